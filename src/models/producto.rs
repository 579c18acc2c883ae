use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: i64,
    pub sku: String,
    pub nombre: String,
    pub tipo: String,
    #[serde(default)]
    pub etiqueta: String,
    pub precio: f64,
    pub unidad_stock: i32,
}

/// Cuerpo de creación/actualización de productos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NuevoProducto {
    pub sku: String,
    pub nombre: String,
    pub tipo: String,
    pub etiqueta: String,
    pub precio: f64,
    pub unidad_stock: i32,
}
