pub mod auth;
pub mod pedido;
pub mod producto;
pub mod usuario;

pub use auth::{LoginRequest, LoginResponse, Rol, Sesion, UsuarioAutenticado};
pub use pedido::{
    estado_texto, total_pedido, ActualizarEstadoRequest, DeliveryActivo, ListarPedidosRequest,
    NuevoPedido, NuevoPedidoProducto, Pedido, PedidoProducto,
};
pub use producto::{NuevoProducto, Producto};
pub use usuario::{puesto_para_rol, NuevoUsuario, Usuario};
