use crate::models::Sesion;
use crate::services::ApiClient;
use crate::utils::{eliminar_de_storage, guardar_en_storage, STORAGE_KEY_SESION};

/// Autentica contra la API y persiste la sesión completa (token + usuario)
/// bajo una sola clave. En caso de fallo no se toca nada: ni el storage ni
/// el estado del llamador.
pub async fn iniciar_sesion(email: &str, password: &str) -> Result<Sesion, String> {
    let respuesta = ApiClient::new(None).login(email, password).await?;

    let sesion = Sesion {
        token: respuesta.token,
        usuario: respuesta.user,
    };

    if let Err(e) = guardar_en_storage(STORAGE_KEY_SESION, &sesion) {
        // La sesión en memoria sigue siendo válida aunque no sobreviva un reload
        log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
    }

    log::info!(
        "✅ Sesión iniciada: {} ({})",
        sesion.usuario.nombre,
        sesion.usuario.rol.etiqueta()
    );

    Ok(sesion)
}

/// Limpia la credencial persistida. Idempotente: cerrar una sesión ya
/// cerrada deja el mismo estado observable.
pub fn cerrar_sesion() {
    let _ = eliminar_de_storage(STORAGE_KEY_SESION);
    log::info!("👋 Sesión cerrada");
}
