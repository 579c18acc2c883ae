use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth, use_pedidos};
use crate::models::{estado_texto, total_pedido, Rol};
use crate::routes::Ruta;
use crate::utils::{alerta, formatear_fecha};

#[derive(Properties, PartialEq)]
pub struct DetallePedidoProps {
    pub id: i64,
}

#[function_component(DetallePedido)]
pub fn detalle_pedido(props: &DetallePedidoProps) -> Html {
    let auth = use_auth();
    let pedidos = use_pedidos();
    let cargando = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Cargar el detalle al montar y cuando cambia el id
    {
        let pedidos = pedidos.clone();
        let cargando = cargando.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            spawn_local(async move {
                cargando.set(true);
                error.set(None);
                if let Err(e) = pedidos.cargar_detalle(id).await {
                    log::error!("❌ Error cargando detalle del pedido {}: {}", id, e);
                    error.set(Some(
                        "No tienes permiso para ver este pedido o ocurrió un error.".to_string(),
                    ));
                }
                cargando.set(false);
            });
            || ()
        });
    }

    if *cargando {
        return html! {
            <div class="d-flex justify-content-center my-5">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Cargando..."}</span>
                </div>
            </div>
        };
    }

    if let Some(mensaje) = (*error).clone() {
        return html! {
            <div class="container mt-4">
                <div class="alert alert-danger">{ mensaje }</div>
                <Link<Ruta> to={Ruta::Pedidos} classes="btn btn-secondary">
                    {"Volver"}
                </Link<Ruta>>
            </div>
        };
    }

    let Some(detalle) = pedidos.detalle() else {
        return html! { <p>{"No se encontraron detalles para este pedido."}</p> };
    };

    // Un Delivery puede avanzar el estado de su pedido hasta Entregado
    let puede_avanzar = auth
        .usuario()
        .map(|u| u.rol == Rol::Delivery && u.id == detalle.delivery_id && detalle.estado < 2)
        .unwrap_or(false);

    let on_avanzar_estado = {
        let pedidos = pedidos.clone();
        let id = detalle.id;
        let siguiente = detalle.estado + 1;
        Callback::from(move |_: MouseEvent| {
            let pedidos = pedidos.clone();
            spawn_local(async move {
                if let Err(e) = pedidos.actualizar_estado(id, siguiente).await {
                    log::error!("❌ Error actualizando estado del pedido {}: {}", id, e);
                    alerta("Error al actualizar el estado del pedido");
                }
            });
        })
    };

    let fecha_opcional = |valor: &Option<String>| match valor {
        Some(fecha) => formatear_fecha(fecha),
        None => "Pendiente".to_string(),
    };

    let filas_productos = detalle
        .productos
        .iter()
        .map(|producto| {
            let subtotal = f64::from(producto.cantidad) * producto.precio_producto;
            html! {
                <tr key={producto.producto_id.to_string()}>
                    <td>{ &producto.nombre_producto }</td>
                    <td>{ producto.cantidad }</td>
                    <td>{ format!("${:.2}", producto.precio_producto) }</td>
                    <td>{ format!("${:.2}", subtotal) }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container mt-4">
            <Link<Ruta> to={Ruta::Pedidos} classes="btn btn-secondary mb-4">
                {"Volver"}
            </Link<Ruta>>
            <h2>{ format!("Detalle del Pedido {}", detalle.numero_pedido) }</h2>

            <div class="row mb-4">
                <div class="col-md-4">
                    <strong>{"Fecha de Pedido: "}</strong>
                    { formatear_fecha(&detalle.fecha_pedido) }
                </div>
                <div class="col-md-4">
                    <strong>{"Fecha de Despacho: "}</strong>
                    { fecha_opcional(&detalle.fecha_despacho) }
                </div>
                <div class="col-md-4">
                    <strong>{"Fecha de Entrega: "}</strong>
                    { fecha_opcional(&detalle.fecha_entrega) }
                </div>
            </div>

            <div class="row mb-4">
                <div class="col-md-4">
                    <strong>{"Estado: "}</strong>
                    { estado_texto(detalle.estado) }
                    if puede_avanzar {
                        <button class="btn btn-sm btn-success ms-3" onclick={on_avanzar_estado}>
                            { format!("Marcar como {}", estado_texto(detalle.estado + 1)) }
                        </button>
                    }
                </div>
            </div>

            <h3>{"Productos"}</h3>
            <table class="table table-striped table-bordered mb-4">
                <thead>
                    <tr>
                        <th>{"Producto"}</th>
                        <th>{"Cantidad"}</th>
                        <th>{"Precio Unitario"}</th>
                        <th>{"Subtotal"}</th>
                    </tr>
                </thead>
                <tbody>
                    { filas_productos }
                    <tr>
                        <td colspan="3" class="text-end"><strong>{"Total:"}</strong></td>
                        <td><strong>{ format!("${:.2}", total_pedido(&detalle.productos)) }</strong></td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
