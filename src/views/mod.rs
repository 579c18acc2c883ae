pub mod crear_pedido;
pub mod dashboard;
pub mod detalle_pedido;
pub mod listado_pedidos;
pub mod login;
pub mod productos;
pub mod usuarios;

pub use crear_pedido::CrearPedido;
pub use dashboard::Dashboard;
pub use detalle_pedido::DetallePedido;
pub use listado_pedidos::ListadoPedidos;
pub use login::Login;
pub use productos::Productos;
pub use usuarios::Usuarios;
