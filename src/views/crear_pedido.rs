use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth, use_pedidos};
use crate::models::{NuevoPedido, NuevoPedidoProducto, Rol};
use crate::routes::Ruta;
use crate::utils::alerta;

#[function_component(CrearPedido)]
pub fn crear_pedido() -> Html {
    let auth = use_auth();
    let pedidos = use_pedidos();

    let numero_pedido = use_state(String::new);
    let fecha_pedido = use_state(String::new);
    let delivery_id = use_state(String::new);
    let estado = use_state(String::new);
    let producto_id = use_state(String::new);
    let cantidad = use_state(String::new);
    let productos = use_state(Vec::<NuevoPedidoProducto>::new);
    let mensaje = use_state(|| None::<(String, bool)>);
    let enviando = use_state(|| false);

    // Cargar los deliveries activos al montar
    {
        let pedidos = pedidos.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = pedidos.cargar_deliveries_activos().await {
                    log::error!("❌ Error cargando repartidores activos: {}", e);
                }
            });
            || ()
        });
    }

    // El guard ya exige Vendedor; esta verificación replica el aviso en
    // pantalla por si la vista se monta fuera del router
    let Some(vendedor) = auth.usuario().filter(|u| u.rol == Rol::Vendedor) else {
        return html! {
            <div class="alert alert-danger">
                {"Acceso denegado. Solo los vendedores pueden registrar pedidos."}
            </div>
        };
    };

    let editar_texto = |estado_handle: &UseStateHandle<String>| {
        let handle = estado_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let editar_select = |estado_handle: &UseStateHandle<String>| {
        let handle = estado_handle.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            handle.set(select.value());
        })
    };

    let on_agregar_producto = {
        let producto_id = producto_id.clone();
        let cantidad = cantidad.clone();
        let productos = productos.clone();
        Callback::from(move |_: MouseEvent| {
            let (Ok(id), Ok(cant)) = (producto_id.parse::<i64>(), cantidad.parse::<u32>()) else {
                alerta("Ingresa un ID de producto y una cantidad válidos");
                return;
            };

            let mut lista = (*productos).clone();
            lista.push(NuevoPedidoProducto {
                producto_id: id,
                cantidad: cant,
            });
            productos.set(lista);
            producto_id.set(String::new());
            cantidad.set(String::new());
        })
    };

    let on_submit = {
        let pedidos = pedidos.clone();
        let numero_pedido = numero_pedido.clone();
        let fecha_pedido = fecha_pedido.clone();
        let delivery_id = delivery_id.clone();
        let estado = estado.clone();
        let productos = productos.clone();
        let mensaje = mensaje.clone();
        let enviando = enviando.clone();
        let vendedor_id = vendedor.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Ok(delivery), Ok(estado_num)) =
                (delivery_id.parse::<i64>(), estado.parse::<i32>())
            else {
                mensaje.set(Some((
                    "Completa todos los campos requeridos.".to_string(),
                    false,
                )));
                return;
            };

            if numero_pedido.is_empty() || fecha_pedido.is_empty() {
                mensaje.set(Some((
                    "Completa todos los campos requeridos.".to_string(),
                    false,
                )));
                return;
            }

            let datos = NuevoPedido {
                numero_pedido: (*numero_pedido).clone(),
                fecha_pedido: (*fecha_pedido).clone(),
                delivery_id: delivery,
                estado: estado_num,
                vendedor_id,
                productos: (*productos).clone(),
            };

            let pedidos = pedidos.clone();
            let mensaje = mensaje.clone();
            let enviando = enviando.clone();
            let numero_pedido = numero_pedido.clone();
            let fecha_pedido = fecha_pedido.clone();
            let delivery_id = delivery_id.clone();
            let estado = estado.clone();
            let productos = productos.clone();

            spawn_local(async move {
                enviando.set(true);
                match pedidos.crear_pedido(datos).await {
                    Ok(()) => {
                        mensaje.set(Some(("Pedido creado exitosamente.".to_string(), true)));
                        // Limpiar el formulario tras crear
                        numero_pedido.set(String::new());
                        fecha_pedido.set(String::new());
                        delivery_id.set(String::new());
                        estado.set(String::new());
                        productos.set(Vec::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error creando pedido: {}", e);
                        mensaje.set(Some(("Error al crear el pedido.".to_string(), false)));
                    }
                }
                enviando.set(false);
            });
        })
    };

    let opciones_delivery = pedidos
        .deliveries_activos()
        .iter()
        .map(|d| {
            html! {
                <option key={d.id.to_string()} value={d.id.to_string()}>
                    { format!("{} - {}", d.nombre, d.codigo_trabajador) }
                </option>
            }
        })
        .collect::<Html>();

    let filas_productos = (*productos)
        .iter()
        .enumerate()
        .map(|(i, prod)| {
            html! {
                <tr key={i.to_string()}>
                    <td>{ prod.producto_id }</td>
                    <td>{ prod.cantidad }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container mt-5">
            <Link<Ruta> to={Ruta::Dashboard} classes="btn btn-secondary mb-4">
                {"Volver"}
            </Link<Ruta>>
            <h2>{"Registrar Nuevo Pedido"}</h2>

            if let Some((texto, exito)) = (*mensaje).clone() {
                <div class={ if exito { "alert alert-success" } else { "alert alert-danger" } }>
                    { texto }
                </div>
            }

            <form onsubmit={on_submit}>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Número de Pedido"}</label>
                        <input
                            class="form-control"
                            value={(*numero_pedido).clone()}
                            oninput={editar_texto(&numero_pedido)}
                        />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Fecha de Pedido"}</label>
                        <input
                            type="date"
                            class="form-control"
                            value={(*fecha_pedido).clone()}
                            oninput={editar_texto(&fecha_pedido)}
                        />
                    </div>
                </div>

                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Delivery"}</label>
                        <select
                            class="form-control"
                            value={(*delivery_id).clone()}
                            onchange={editar_select(&delivery_id)}
                        >
                            <option value="">{"Seleccionar Delivery"}</option>
                            { opciones_delivery }
                        </select>
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Estado"}</label>
                        <select
                            class="form-control"
                            value={(*estado).clone()}
                            onchange={editar_select(&estado)}
                        >
                            <option value="">{"Seleccionar Estado"}</option>
                            <option value="0">{"Por Atender"}</option>
                            <option value="1">{"En Proceso"}</option>
                            <option value="2">{"Entregado"}</option>
                        </select>
                    </div>
                </div>

                <h4>{"Agregar Producto"}</h4>
                <div class="row mb-3">
                    <div class="col-md-6">
                        <label class="form-label">{"ID de Producto"}</label>
                        <input
                            class="form-control"
                            value={(*producto_id).clone()}
                            oninput={editar_texto(&producto_id)}
                        />
                    </div>
                    <div class="col-md-4">
                        <label class="form-label">{"Cantidad"}</label>
                        <input
                            type="number"
                            class="form-control"
                            value={(*cantidad).clone()}
                            oninput={editar_texto(&cantidad)}
                        />
                    </div>
                    <div class="col-md-2 d-flex align-items-end">
                        <button
                            type="button"
                            class="btn btn-primary w-100"
                            onclick={on_agregar_producto}
                        >
                            {"Agregar"}
                        </button>
                    </div>
                </div>

                <button type="submit" class="btn btn-success w-100 mt-4" disabled={*enviando}>
                    { if *enviando { "Registrando..." } else { "Registrar Pedido" } }
                </button>

                <h4 class="mt-5">{"Productos en el Pedido"}</h4>
                if (*productos).is_empty() {
                    <p class="text-muted">{"No hay productos agregados al pedido."}</p>
                } else {
                    <table class="table table-striped table-bordered mt-3">
                        <thead>
                            <tr>
                                <th>{"ID de Producto"}</th>
                                <th>{"Cantidad"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { filas_productos }
                        </tbody>
                    </table>
                }
            </form>
        </div>
    }
}
