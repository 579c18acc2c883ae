// ============================================================================
// USE AUTH - Sesión compartida via Context API de Yew
// ============================================================================
// La sesión se inyecta explícitamente desde AuthProvider: nada de
// singletons globales, el guard y las vistas la reciben por contexto.
// ============================================================================

use yew::prelude::*;

use crate::models::{Sesion, UsuarioAutenticado};
use crate::services::auth_service;
use crate::stores::{AuthAction, AuthStore};

pub type AuthContext = UseReducerHandle<AuthStore>;

/// Provider que envuelve la app y restaura la sesión persistida al montar
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_reducer(AuthStore::restaurar);

    html! {
        <ContextProvider<AuthContext> context={store}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    store: AuthContext,
}

impl UseAuthHandle {
    /// Instantánea de la sesión en memoria; nunca hace I/O
    pub fn sesion(&self) -> Option<Sesion> {
        self.store.sesion.clone()
    }

    pub fn usuario(&self) -> Option<UsuarioAutenticado> {
        self.store.sesion.as_ref().map(|s| s.usuario.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.store.sesion.as_ref().map(|s| s.token.clone())
    }

    pub fn esta_autenticado(&self) -> bool {
        self.store.sesion.is_some()
    }

    /// Login contra la API. En caso de éxito persiste y publica la sesión;
    /// en caso de fallo el estado anterior queda intacto y el error se
    /// devuelve al llamador (sin reintentos).
    pub async fn login(&self, email: String, password: String) -> Result<(), String> {
        let sesion = auth_service::iniciar_sesion(&email, &password).await?;
        self.store.dispatch(AuthAction::IniciarSesion(sesion));
        Ok(())
    }

    pub fn logout(&self) {
        auth_service::cerrar_sesion();
        self.store.dispatch(AuthAction::CerrarSesion);
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let store = use_context::<AuthContext>().expect("use_auth requiere un AuthProvider padre");
    UseAuthHandle { store }
}
