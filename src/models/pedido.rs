use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: i64,
    pub numero_pedido: String,
    pub fecha_pedido: String,
    #[serde(default)]
    pub fecha_despacho: Option<String>,
    #[serde(default)]
    pub fecha_entrega: Option<String>,
    pub estado: i32,
    pub delivery_id: i64,
    #[serde(default)]
    pub productos: Vec<PedidoProducto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PedidoProducto {
    pub producto_id: i64,
    pub nombre_producto: String,
    pub cantidad: u32,
    pub precio_producto: f64,
}

/// Cuerpo de POST /pedidos/listar. El backend espera el nombre en PascalCase.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ListarPedidosRequest {
    #[serde(rename = "NumeroPedido")]
    pub numero_pedido: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NuevoPedido {
    pub numero_pedido: String,
    pub fecha_pedido: String,
    pub delivery_id: i64,
    pub estado: i32,
    pub vendedor_id: i64,
    pub productos: Vec<NuevoPedidoProducto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NuevoPedidoProducto {
    pub producto_id: i64,
    pub cantidad: u32,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ActualizarEstadoRequest {
    pub estado: i32,
}

/// Repartidor elegible para asignación de pedidos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryActivo {
    pub id: i64,
    pub nombre: String,
    pub codigo_trabajador: String,
}

/// Texto visible para el estado numérico del pedido
pub fn estado_texto(estado: i32) -> &'static str {
    match estado {
        0 => "Por Atender",
        1 => "En Proceso",
        2 => "Entregado",
        _ => "Desconocido",
    }
}

/// Precio total del pedido (suma de cantidad × precio unitario)
pub fn total_pedido(productos: &[PedidoProducto]) -> f64 {
    productos
        .iter()
        .map(|p| f64::from(p.cantidad) * p.precio_producto)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estados_conocidos_tienen_texto() {
        assert_eq!(estado_texto(0), "Por Atender");
        assert_eq!(estado_texto(1), "En Proceso");
        assert_eq!(estado_texto(2), "Entregado");
    }

    #[test]
    fn estado_fuera_de_rango_es_desconocido() {
        assert_eq!(estado_texto(-1), "Desconocido");
        assert_eq!(estado_texto(3), "Desconocido");
        assert_eq!(estado_texto(99), "Desconocido");
    }

    #[test]
    fn total_suma_subtotales() {
        let productos = vec![
            PedidoProducto {
                producto_id: 1,
                nombre_producto: "Caja chica".to_string(),
                cantidad: 3,
                precio_producto: 10.5,
            },
            PedidoProducto {
                producto_id: 2,
                nombre_producto: "Caja grande".to_string(),
                cantidad: 1,
                precio_producto: 20.0,
            },
        ];

        assert!((total_pedido(&productos) - 51.5).abs() < f64::EPSILON);
        assert_eq!(total_pedido(&[]), 0.0);
    }

    #[test]
    fn deserializa_listado_de_pedidos() {
        let json = r#"[
            {"id":1,"numeroPedido":"P-001","fechaPedido":"2024-11-01","estado":0,"deliveryId":7},
            {"id":2,"numeroPedido":"P-002","fechaPedido":"2024-11-02","estado":1,"deliveryId":9},
            {"id":3,"numeroPedido":"P-003","fechaPedido":"2024-11-03","estado":2,"deliveryId":7}
        ]"#;
        let pedidos: Vec<Pedido> = serde_json::from_str(json).unwrap();

        assert_eq!(pedidos.len(), 3);
        assert_eq!(estado_texto(pedidos[2].estado), "Entregado");
        assert!(pedidos[0].productos.is_empty());
        assert!(pedidos[0].fecha_despacho.is_none());
    }
}
