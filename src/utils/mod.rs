// Utils compartidos

pub mod constants;
pub mod fechas;
pub mod storage;

pub use constants::*;
pub use fechas::*;
pub use storage::*;

/// Muestra un mensaje bloqueante al usuario (fallos de escritura, validación)
pub fn alerta(mensaje: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(mensaje);
    }
}
