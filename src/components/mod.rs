pub mod ruta_protegida;

pub use ruta_protegida::{autorizar, Decision, RutaProtegida};
