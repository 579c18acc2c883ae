// ============================================================================
// USE PEDIDOS - Provider de datos de pedidos
// ============================================================================
// Cache compartida de pedidos (lista, detalle y repartidores activos) con
// operaciones fetch/create. Toda operación devuelve Result: cada vista
// decide su política de presentación (las lecturas suelen loguear y dejar
// datos obsoletos; las escrituras muestran un mensaje genérico).
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::{DeliveryActivo, NuevoPedido, Pedido};
use crate::services::ApiClient;
use crate::stores::{PedidosAction, PedidosStore};

pub type PedidosContext = UseReducerHandle<PedidosStore>;

#[function_component(PedidosProvider)]
pub fn pedidos_provider(props: &PedidosProviderProps) -> Html {
    let store = use_reducer(PedidosStore::default);

    html! {
        <ContextProvider<PedidosContext> context={store}>
            { props.children.clone() }
        </ContextProvider<PedidosContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct PedidosProviderProps {
    pub children: Children,
}

/// Operaciones del API que usa el flujo de registro de pedidos. Abstraído
/// del cliente concreto para poder ejercitar el flujo con un doble.
trait ApiPedidos {
    async fn crear(&self, datos: &NuevoPedido) -> Result<(), String>;
    async fn listar(&self, filtro: Option<&str>) -> Result<Vec<Pedido>, String>;
}

impl ApiPedidos for ApiClient {
    async fn crear(&self, datos: &NuevoPedido) -> Result<(), String> {
        self.crear_pedido(datos).await
    }

    async fn listar(&self, filtro: Option<&str>) -> Result<Vec<Pedido>, String> {
        self.listar_pedidos(filtro).await
    }
}

/// Registra el pedido y devuelve la lista canónica re-obtenida del
/// servidor. Si el POST falla no se consulta la lista y el error sube al
/// llamador: la cache queda exactamente como estaba.
async fn crear_y_listar<A: ApiPedidos>(
    api: &A,
    datos: &NuevoPedido,
) -> Result<Vec<Pedido>, String> {
    api.crear(datos).await?;
    api.listar(None).await
}

#[derive(Clone, PartialEq)]
pub struct UsePedidosHandle {
    store: PedidosContext,
    api: ApiClient,
}

impl UsePedidosHandle {
    pub fn pedidos(&self) -> Vec<Pedido> {
        self.store.pedidos.clone()
    }

    pub fn detalle(&self) -> Option<Pedido> {
        self.store.detalle.clone()
    }

    pub fn deliveries_activos(&self) -> Vec<DeliveryActivo> {
        self.store.deliveries_activos.clone()
    }

    /// Reemplaza la lista completa con la respuesta del servidor,
    /// opcionalmente filtrada por número de pedido
    pub async fn cargar_pedidos(&self, filtro: Option<String>) -> Result<(), String> {
        let pedidos = self.api.listar_pedidos(filtro.as_deref()).await?;
        log::info!("📦 Pedidos obtenidos: {}", pedidos.len());
        self.store.dispatch(PedidosAction::ReemplazarPedidos(pedidos));
        Ok(())
    }

    pub async fn cargar_detalle(&self, id: i64) -> Result<(), String> {
        let pedido = self.api.get_detalle_pedido(id).await?;
        self.store.dispatch(PedidosAction::ReemplazarDetalle(pedido));
        Ok(())
    }

    pub async fn cargar_deliveries_activos(&self) -> Result<(), String> {
        let deliveries = self.api.get_deliveries_activos().await?;
        log::info!("🚚 Repartidores activos: {}", deliveries.len());
        self.store
            .dispatch(PedidosAction::ReemplazarDeliveries(deliveries));
        Ok(())
    }

    /// Registra el pedido y vuelve a pedir la lista canónica al servidor
    pub async fn crear_pedido(&self, datos: NuevoPedido) -> Result<(), String> {
        let pedidos = crear_y_listar(&self.api, &datos).await?;
        log::info!("📦 Pedidos obtenidos: {}", pedidos.len());
        self.store.dispatch(PedidosAction::ReemplazarPedidos(pedidos));
        Ok(())
    }

    pub async fn actualizar_estado(&self, id: i64, estado: i32) -> Result<(), String> {
        self.api.actualizar_estado_pedido(id, estado).await?;
        self.cargar_detalle(id).await
    }

    pub async fn eliminar_pedido(&self, id: i64) -> Result<(), String> {
        self.api.eliminar_pedido(id).await?;
        self.cargar_pedidos(None).await
    }
}

#[hook]
pub fn use_pedidos() -> UsePedidosHandle {
    let store =
        use_context::<PedidosContext>().expect("use_pedidos requiere un PedidosProvider padre");
    let auth = use_auth();

    UsePedidosHandle {
        store,
        api: ApiClient::new(auth.token()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    struct ApiDePrueba {
        falla_crear: bool,
        listados: Cell<u32>,
    }

    impl ApiPedidos for ApiDePrueba {
        async fn crear(&self, _datos: &NuevoPedido) -> Result<(), String> {
            if self.falla_crear {
                Err("HTTP 500: Internal Server Error".to_string())
            } else {
                Ok(())
            }
        }

        async fn listar(&self, _filtro: Option<&str>) -> Result<Vec<Pedido>, String> {
            self.listados.set(self.listados.get() + 1);
            Ok(vec![Pedido {
                id: 1,
                numero_pedido: "P-001".to_string(),
                fecha_pedido: "2024-11-01".to_string(),
                fecha_despacho: None,
                fecha_entrega: None,
                estado: 0,
                delivery_id: 7,
                productos: Vec::new(),
            }])
        }
    }

    fn nuevo_pedido() -> NuevoPedido {
        NuevoPedido {
            numero_pedido: "P-001".to_string(),
            fecha_pedido: "2024-11-01".to_string(),
            delivery_id: 7,
            estado: 0,
            vendedor_id: 2,
            productos: Vec::new(),
        }
    }

    #[test]
    fn crear_fallido_devuelve_error_y_no_recarga_la_lista() {
        let api = ApiDePrueba {
            falla_crear: true,
            listados: Cell::new(0),
        };

        let resultado = block_on(crear_y_listar(&api, &nuevo_pedido()));

        assert!(resultado.is_err());
        // Sin recarga no hay nada que despachar: la cache del llamador
        // conserva la lista anterior
        assert_eq!(api.listados.get(), 0);
    }

    #[test]
    fn crear_exitoso_entrega_la_lista_del_servidor() {
        let api = ApiDePrueba {
            falla_crear: false,
            listados: Cell::new(0),
        };

        let pedidos = block_on(crear_y_listar(&api, &nuevo_pedido())).unwrap();

        assert_eq!(api.listados.get(), 1);
        assert_eq!(pedidos.len(), 1);
        assert_eq!(pedidos[0].numero_pedido, "P-001");
    }
}
