/// URL base de la API de pedidos
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000/api (por defecto)
/// - Producción: via API_BASE_URL en .env (build.rs la expone al compilador)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Clave única de localStorage con la sesión completa (token + usuario)
pub const STORAGE_KEY_SESION: &str = "pedidosAdmin_sesion";
