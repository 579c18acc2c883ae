pub mod use_auth;
pub mod use_pedidos;

pub use use_auth::{use_auth, AuthContext, AuthProvider, UseAuthHandle};
pub use use_pedidos::{use_pedidos, PedidosContext, PedidosProvider, UsePedidosHandle};
