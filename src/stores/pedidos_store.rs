// ============================================================================
// PEDIDOS STORE - Cache en memoria de la colección de pedidos
// ============================================================================
// Cada fetch reemplaza la colección completa; la última respuesta en
// resolver gana.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{DeliveryActivo, Pedido};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PedidosStore {
    pub pedidos: Vec<Pedido>,
    pub detalle: Option<Pedido>,
    pub deliveries_activos: Vec<DeliveryActivo>,
}

pub enum PedidosAction {
    ReemplazarPedidos(Vec<Pedido>),
    ReemplazarDetalle(Pedido),
    ReemplazarDeliveries(Vec<DeliveryActivo>),
}

impl Reducible for PedidosStore {
    type Action = PedidosAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut nuevo = (*self).clone();
        match action {
            PedidosAction::ReemplazarPedidos(pedidos) => nuevo.pedidos = pedidos,
            PedidosAction::ReemplazarDetalle(pedido) => nuevo.detalle = Some(pedido),
            PedidosAction::ReemplazarDeliveries(deliveries) => {
                nuevo.deliveries_activos = deliveries
            }
        }
        Rc::new(nuevo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido(id: i64, delivery_id: i64) -> Pedido {
        Pedido {
            id,
            numero_pedido: format!("P-{:03}", id),
            fecha_pedido: "2024-11-01".to_string(),
            fecha_despacho: None,
            fecha_entrega: None,
            estado: 0,
            delivery_id,
            productos: Vec::new(),
        }
    }

    #[test]
    fn fetch_reemplaza_la_lista_completa() {
        let store = Rc::new(PedidosStore::default());
        let store = store.reduce(PedidosAction::ReemplazarPedidos(vec![pedido(1, 7)]));
        let store = store.reduce(PedidosAction::ReemplazarPedidos(vec![
            pedido(2, 7),
            pedido(3, 9),
        ]));

        assert_eq!(store.pedidos.len(), 2);
        assert_eq!(store.pedidos[0].id, 2);
    }

    #[test]
    fn el_detalle_no_toca_la_lista() {
        let store = Rc::new(PedidosStore::default());
        let store = store.reduce(PedidosAction::ReemplazarPedidos(vec![pedido(1, 7)]));
        let store = store.reduce(PedidosAction::ReemplazarDetalle(pedido(5, 9)));

        assert_eq!(store.pedidos.len(), 1);
        assert_eq!(store.detalle.as_ref().unwrap().id, 5);
    }
}
