// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Centraliza las llamadas salientes a la API REST. Adjunta el token bearer
// de la sesión cuando existe; no interpreta 401/403, los fallos se propagan
// sin cambios al llamador.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::models::{
    ActualizarEstadoRequest, DeliveryActivo, ListarPedidosRequest, LoginRequest, LoginResponse,
    NuevoPedido, NuevoProducto, NuevoUsuario, Pedido, Producto, Usuario,
};
use crate::utils::constants::API_BASE_URL;

/// Cliente API. Se construye con el token de la sesión actual (si la hay);
/// cada vista crea el suyo a partir del contexto de autenticación.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            token,
        }
    }

    fn url(&self, ruta: &str) -> String {
        format!("{}{}", self.base_url, ruta)
    }

    /// Valor del encabezado Authorization, si hay credencial
    fn encabezado_autorizacion(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn con_autorizacion(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.encabezado_autorizacion() {
            Some(valor) => builder.header("Authorization", &valor),
            None => builder,
        }
    }

    fn get(&self, ruta: &str) -> RequestBuilder {
        self.con_autorizacion(Request::get(&self.url(ruta)))
    }

    fn post(&self, ruta: &str) -> RequestBuilder {
        self.con_autorizacion(Request::post(&self.url(ruta)))
    }

    fn put(&self, ruta: &str) -> RequestBuilder {
        self.con_autorizacion(Request::put(&self.url(ruta)))
    }

    fn delete(&self, ruta: &str) -> RequestBuilder {
        self.con_autorizacion(Request::delete(&self.url(ruta)))
    }

    fn verificar(response: Response) -> Result<Response, String> {
        if response.ok() {
            Ok(response)
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    // ------------------------------------------------------------------
    // Autenticación
    // ------------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let cuerpo = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post("/auth/login")
            .json(&cuerpo)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    // ------------------------------------------------------------------
    // Usuarios
    // ------------------------------------------------------------------

    pub async fn get_usuarios(&self) -> Result<Vec<Usuario>, String> {
        let response = self
            .get("/usuarios")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Vec<Usuario>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn crear_usuario(&self, datos: &NuevoUsuario) -> Result<(), String> {
        let response = self
            .post("/usuarios")
            .json(datos)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn actualizar_usuario(&self, id: i64, datos: &NuevoUsuario) -> Result<(), String> {
        let response = self
            .put(&format!("/usuarios/{}", id))
            .json(datos)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn eliminar_usuario(&self, id: i64) -> Result<(), String> {
        let response = self
            .delete(&format!("/usuarios/{}", id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Productos
    // ------------------------------------------------------------------

    pub async fn get_productos(&self) -> Result<Vec<Producto>, String> {
        let response = self
            .get("/productos")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Vec<Producto>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn buscar_productos(&self, criterio: &str) -> Result<Vec<Producto>, String> {
        let response = self
            .get(&format!("/productos/buscar?criterio={}", criterio))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Vec<Producto>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn crear_producto(&self, datos: &NuevoProducto) -> Result<(), String> {
        let response = self
            .post("/productos")
            .json(datos)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn actualizar_producto(&self, id: i64, datos: &NuevoProducto) -> Result<(), String> {
        let response = self
            .put(&format!("/productos/{}", id))
            .json(datos)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn eliminar_producto(&self, id: i64) -> Result<(), String> {
        let response = self
            .delete(&format!("/productos/{}", id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Pedidos
    // ------------------------------------------------------------------

    pub async fn listar_pedidos(&self, numero_pedido: Option<&str>) -> Result<Vec<Pedido>, String> {
        let cuerpo = ListarPedidosRequest {
            numero_pedido: numero_pedido.map(|n| n.to_string()),
        };

        let response = self
            .post("/pedidos/listar")
            .json(&cuerpo)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Vec<Pedido>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_detalle_pedido(&self, id: i64) -> Result<Pedido, String> {
        let response = self
            .get(&format!("/pedidos/{}/detalle", id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Pedido>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn crear_pedido(&self, datos: &NuevoPedido) -> Result<(), String> {
        log::info!("📝 Registrando pedido: {}", datos.numero_pedido);

        let response = self
            .post("/pedidos")
            .json(datos)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn actualizar_estado_pedido(&self, id: i64, estado: i32) -> Result<(), String> {
        let cuerpo = ActualizarEstadoRequest { estado };

        let response = self
            .put(&format!("/pedidos/{}/estado", id))
            .json(&cuerpo)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn eliminar_pedido(&self, id: i64) -> Result<(), String> {
        let response = self
            .delete(&format!("/pedidos/{}", id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::verificar(response).map(|_| ())
    }

    pub async fn get_deliveries_activos(&self) -> Result<Vec<DeliveryActivo>, String> {
        let response = self
            .get("/pedidos/usuarios-delivery-activos")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = Self::verificar(response)?;
        response
            .json::<Vec<DeliveryActivo>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn con_token_adjunta_bearer() {
        let cliente = ApiClient::new(Some("T1".to_string()));
        assert_eq!(
            cliente.encabezado_autorizacion(),
            Some("Bearer T1".to_string())
        );
    }

    #[test]
    fn sin_token_no_hay_encabezado() {
        let cliente = ApiClient::new(None);
        assert_eq!(cliente.encabezado_autorizacion(), None);
    }

    #[test]
    fn compone_urls_sobre_la_base_configurada() {
        let cliente = ApiClient::new(None);
        assert_eq!(
            cliente.url("/pedidos/7/detalle"),
            format!("{}/pedidos/7/detalle", API_BASE_URL)
        );
    }
}
