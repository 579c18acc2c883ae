use serde::{Deserialize, Serialize};

/// Registro de personal de la pantalla de gestión. Distinto de
/// `UsuarioAutenticado`: aquí el rol viaja como número de formulario.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub codigo_trabajador: String,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    pub rol: i32,
    pub estado: i32,
    #[serde(default)]
    pub puesto: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NuevoUsuario {
    pub codigo_trabajador: String,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub rol: i32,
    pub estado: i32,
    pub puesto: String,
    pub password: String,
}

/// Puesto derivado del rol numérico del formulario (0/1/2)
pub fn puesto_para_rol(rol: i32) -> &'static str {
    match rol {
        0 => "Encargado",
        1 => "Vendedor",
        _ => "Delivery",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puesto_segun_rol_numerico() {
        assert_eq!(puesto_para_rol(0), "Encargado");
        assert_eq!(puesto_para_rol(1), "Vendedor");
        assert_eq!(puesto_para_rol(2), "Delivery");
    }
}
