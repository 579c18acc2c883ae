pub mod api_client;
pub mod auth_service;

pub use api_client::ApiClient;
pub use auth_service::{cerrar_sesion, iniciar_sesion};
