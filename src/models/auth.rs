use serde::{Deserialize, Serialize};

/// Rol del personal. Enumeración cerrada: el backend entrega el nombre
/// exacto y cualquier otro valor es un error de deserialización.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Rol {
    Encargado,
    Vendedor,
    Delivery,
}

impl Rol {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Rol::Encargado => "Encargado",
            Rol::Vendedor => "Vendedor",
            Rol::Delivery => "Delivery",
        }
    }
}

/// Identidad del usuario autenticado (el `user` de la respuesta de login)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UsuarioAutenticado {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    pub rol: Rol,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: UsuarioAutenticado,
}

/// Sesión completa. Token e identidad viven y mueren juntos: no existe
/// un estado con uno sin el otro.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Sesion {
    pub token: String,
    pub usuario: UsuarioAutenticado,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_respuesta_de_login() {
        let json = r#"{"token":"T1","user":{"id":1,"nombre":"Ana","rol":"Encargado"}}"#;
        let respuesta: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(respuesta.token, "T1");
        assert_eq!(respuesta.user.id, 1);
        assert_eq!(respuesta.user.nombre, "Ana");
        assert_eq!(respuesta.user.rol, Rol::Encargado);
    }

    #[test]
    fn rol_desconocido_es_error() {
        let json = r#"{"id":1,"nombre":"Ana","rol":"Gerente"}"#;
        assert!(serde_json::from_str::<UsuarioAutenticado>(json).is_err());
    }

    #[test]
    fn rol_serializa_como_nombre() {
        assert_eq!(serde_json::to_string(&Rol::Delivery).unwrap(), "\"Delivery\"");
    }
}
