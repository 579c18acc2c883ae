pub mod auth_store;
pub mod pedidos_store;

pub use auth_store::{AuthAction, AuthStore};
pub use pedidos_store::{PedidosAction, PedidosStore};
