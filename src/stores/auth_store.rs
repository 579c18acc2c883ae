// ============================================================================
// AUTH STORE - Única fuente de verdad de "quién está logueado"
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::Sesion;
use crate::utils::{cargar_de_storage, STORAGE_KEY_SESION};

/// Estado de sesión en memoria. `None` = nadie autenticado.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthStore {
    pub sesion: Option<Sesion>,
}

pub enum AuthAction {
    IniciarSesion(Sesion),
    CerrarSesion,
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::IniciarSesion(sesion) => Rc::new(AuthStore {
                sesion: Some(sesion),
            }),
            AuthAction::CerrarSesion => Rc::new(AuthStore::default()),
        }
    }
}

impl AuthStore {
    /// Estado inicial al arrancar: restaura la sesión persistida si existe.
    /// Como se guarda token + usuario juntos, nunca hay credencial sin
    /// identidad tras un reload.
    pub fn restaurar() -> Self {
        let sesion = cargar_de_storage::<Sesion>(STORAGE_KEY_SESION);
        if let Some(s) = &sesion {
            log::info!("💾 Sesión restaurada desde storage: {}", s.usuario.nombre);
        }
        Self { sesion }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rol, UsuarioAutenticado};

    fn sesion_de_prueba() -> Sesion {
        Sesion {
            token: "T1".to_string(),
            usuario: UsuarioAutenticado {
                id: 1,
                nombre: "Ana".to_string(),
                email: "a@b.com".to_string(),
                rol: Rol::Encargado,
            },
        }
    }

    #[test]
    fn iniciar_sesion_guarda_credencial_e_identidad_juntas() {
        let store = Rc::new(AuthStore::default());
        let store = store.reduce(AuthAction::IniciarSesion(sesion_de_prueba()));

        let sesion = store.sesion.as_ref().unwrap();
        assert_eq!(sesion.token, "T1");
        assert_eq!(sesion.usuario.rol, Rol::Encargado);
    }

    #[test]
    fn login_y_logout_dejan_estado_totalmente_ausente() {
        let store = Rc::new(AuthStore::default());
        let store = store.reduce(AuthAction::IniciarSesion(sesion_de_prueba()));
        let store = store.reduce(AuthAction::CerrarSesion);

        assert!(store.sesion.is_none());
    }

    #[test]
    fn cerrar_sesion_es_idempotente() {
        let store = Rc::new(AuthStore::default());
        let store = store.reduce(AuthAction::CerrarSesion);

        assert_eq!(*store, AuthStore::default());
    }
}
