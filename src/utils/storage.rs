// Persistencia en localStorage. El único dato que la app guarda es la
// sesión (token + usuario, como JSON bajo STORAGE_KEY_SESION); fuera de
// un navegador estas funciones degradan a no-op.

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn guardar_en_storage<T: Serialize>(clave: &str, valor: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage no disponible")?;
    let json =
        serde_json::to_string(valor).map_err(|e| format!("Error serializando valor: {}", e))?;
    storage
        .set_item(clave, &json)
        .map_err(|_| "Error escribiendo en localStorage".to_string())
}

/// Lee y deserializa el valor guardado. Un valor corrupto o de un formato
/// anterior se trata igual que la ausencia de valor.
pub fn cargar_de_storage<T: DeserializeOwned>(clave: &str) -> Option<T> {
    let json = local_storage()?.get_item(clave).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn eliminar_de_storage(clave: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage no disponible")?;
    storage
        .remove_item(clave)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}
