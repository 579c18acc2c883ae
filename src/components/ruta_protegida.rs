// ============================================================================
// RUTA PROTEGIDA - Guard de acceso por rol
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::{Rol, Sesion};
use crate::routes::Ruta;

/// Resultado de autorizar una navegación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Permitir,
    IrALogin,
    IrADashboard,
}

/// Decisión pura de autorización: función de (roles requeridos, sesión),
/// sin efectos, re-evaluada en cada navegación.
/// `roles == None` significa "cualquier identidad autenticada".
pub fn autorizar(roles: Option<&[Rol]>, sesion: Option<&Sesion>) -> Decision {
    let Some(sesion) = sesion else {
        return Decision::IrALogin;
    };

    match roles {
        Some(permitidos) if !permitidos.contains(&sesion.usuario.rol) => Decision::IrADashboard,
        _ => Decision::Permitir,
    }
}

#[derive(Properties, PartialEq)]
pub struct RutaProtegidaProps {
    /// Conjunto de roles aceptados; `None` = basta estar autenticado
    #[prop_or_default]
    pub roles: Option<Vec<Rol>>,
    pub children: Html,
}

#[function_component(RutaProtegida)]
pub fn ruta_protegida(props: &RutaProtegidaProps) -> Html {
    let auth = use_auth();
    let sesion = auth.sesion();

    match autorizar(props.roles.as_deref(), sesion.as_ref()) {
        Decision::Permitir => props.children.clone(),
        Decision::IrALogin => html! { <Redirect<Ruta> to={Ruta::Inicio} /> },
        Decision::IrADashboard => html! { <Redirect<Ruta> to={Ruta::Dashboard} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UsuarioAutenticado;

    const TODOS: [Rol; 3] = [Rol::Encargado, Rol::Vendedor, Rol::Delivery];

    fn sesion_con(rol: Rol) -> Sesion {
        Sesion {
            token: "T1".to_string(),
            usuario: UsuarioAutenticado {
                id: 1,
                nombre: "Ana".to_string(),
                email: "a@b.com".to_string(),
                rol,
            },
        }
    }

    #[test]
    fn sin_credencial_siempre_redirige_a_login() {
        assert_eq!(autorizar(None, None), Decision::IrALogin);
        for rol in TODOS {
            assert_eq!(autorizar(Some(&[rol]), None), Decision::IrALogin);
        }
        assert_eq!(autorizar(Some(&TODOS), None), Decision::IrALogin);
        assert_eq!(autorizar(Some(&[]), None), Decision::IrALogin);
    }

    #[test]
    fn rol_fuera_del_conjunto_redirige_a_dashboard() {
        for rol in TODOS {
            let permitidos: Vec<Rol> = TODOS.into_iter().filter(|r| *r != rol).collect();
            let sesion = sesion_con(rol);
            assert_eq!(
                autorizar(Some(&permitidos), Some(&sesion)),
                Decision::IrADashboard
            );
        }
    }

    #[test]
    fn rol_dentro_del_conjunto_permite() {
        for rol in TODOS {
            let sesion = sesion_con(rol);
            assert_eq!(autorizar(Some(&[rol]), Some(&sesion)), Decision::Permitir);
            assert_eq!(autorizar(Some(&TODOS), Some(&sesion)), Decision::Permitir);
        }
    }

    #[test]
    fn sin_roles_requeridos_basta_estar_autenticado() {
        for rol in TODOS {
            let sesion = sesion_con(rol);
            assert_eq!(autorizar(None, Some(&sesion)), Decision::Permitir);
        }
    }
}
