use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth, use_pedidos};
use crate::models::{estado_texto, Pedido, Rol, UsuarioAutenticado};
use crate::routes::Ruta;
use crate::utils::{alerta, formatear_fecha};

/// Filtro aplicado al renderizar sobre la lista cacheada completa: un
/// Delivery solo ve sus propios pedidos y la búsqueda es por número.
pub fn filtrar_pedidos(
    pedidos: &[Pedido],
    usuario: &UsuarioAutenticado,
    busqueda: &str,
) -> Vec<Pedido> {
    pedidos
        .iter()
        .filter(|p| usuario.rol != Rol::Delivery || p.delivery_id == usuario.id)
        .filter(|p| busqueda.is_empty() || p.numero_pedido.contains(busqueda))
        .cloned()
        .collect()
}

#[function_component(ListadoPedidos)]
pub fn listado_pedidos() -> Html {
    let auth = use_auth();
    let pedidos = use_pedidos();
    let busqueda = use_state(String::new);
    let cargando = use_state(|| true);
    let buscando = use_state(|| false);

    // Obtener todos los pedidos al montar. Lectura con política silenciosa:
    // si falla se loguea y la vista muestra lo que haya en cache.
    {
        let pedidos = pedidos.clone();
        let cargando = cargando.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = pedidos.cargar_pedidos(None).await {
                    log::error!("❌ Error cargando pedidos: {}", e);
                }
                cargando.set(false);
            });
            || ()
        });
    }

    let Some(usuario) = auth.usuario() else {
        return html! {};
    };

    let on_busqueda_change = {
        let busqueda = busqueda.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            busqueda.set(input.value());
        })
    };

    let on_buscar = {
        let pedidos = pedidos.clone();
        let busqueda = busqueda.clone();
        let buscando = buscando.clone();
        Callback::from(move |_: MouseEvent| {
            let pedidos = pedidos.clone();
            let buscando = buscando.clone();
            let filtro = (*busqueda).clone();
            spawn_local(async move {
                buscando.set(true);
                let filtro = if filtro.is_empty() { None } else { Some(filtro) };
                if let Err(e) = pedidos.cargar_pedidos(filtro).await {
                    log::error!("❌ Error buscando pedidos: {}", e);
                }
                buscando.set(false);
            });
        })
    };

    let on_eliminar = {
        let pedidos = pedidos.clone();
        Callback::from(move |id: i64| {
            let pedidos = pedidos.clone();
            spawn_local(async move {
                match pedidos.eliminar_pedido(id).await {
                    Ok(()) => alerta("Pedido eliminado exitosamente"),
                    Err(e) => {
                        log::error!("❌ Error eliminando pedido {}: {}", id, e);
                        alerta("Error al eliminar el pedido");
                    }
                }
            });
        })
    };

    let visibles = filtrar_pedidos(&pedidos.pedidos(), &usuario, &busqueda);
    let es_encargado = usuario.rol == Rol::Encargado;

    let filas = visibles
        .iter()
        .map(|pedido| {
            let id = pedido.id;
            let on_eliminar = on_eliminar.clone();
            html! {
                <tr key={pedido.id.to_string()}>
                    <td>{ &pedido.numero_pedido }</td>
                    <td>{ formatear_fecha(&pedido.fecha_pedido) }</td>
                    <td>{ estado_texto(pedido.estado) }</td>
                    <td>
                        <Link<Ruta>
                            to={Ruta::DetallePedido { id: pedido.id }}
                            classes="btn btn-link"
                        >
                            {"Ver Detalle"}
                        </Link<Ruta>>
                        if es_encargado {
                            <button
                                class="btn btn-outline-danger btn-sm"
                                onclick={Callback::from(move |_| on_eliminar.emit(id))}
                            >
                                {"Eliminar"}
                            </button>
                        }
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container mt-4">
            <h2 class="text-center mb-4">{"Listado de Pedidos"}</h2>

            <div class="d-flex justify-content-between mb-3">
                <Link<Ruta> to={Ruta::Dashboard} classes="btn btn-secondary">
                    {"Volver"}
                </Link<Ruta>>
                <div class="input-group w-50">
                    <input
                        class="form-control"
                        placeholder="Buscar por Nro. de pedido"
                        value={(*busqueda).clone()}
                        oninput={on_busqueda_change}
                    />
                    <button class="btn btn-primary" onclick={on_buscar} disabled={*buscando}>
                        { if *buscando { "Buscando..." } else { "Buscar" } }
                    </button>
                </div>
            </div>

            if *cargando {
                <div class="d-flex justify-content-center my-5">
                    <div class="spinner-border" role="status">
                        <span class="visually-hidden">{"Cargando..."}</span>
                    </div>
                </div>
            } else {
                <table class="table table-striped table-bordered table-hover">
                    <thead>
                        <tr>
                            <th>{"Nro. Pedido"}</th>
                            <th>{"Fecha Pedido"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { filas }
                    </tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(id: i64, rol: Rol) -> UsuarioAutenticado {
        UsuarioAutenticado {
            id,
            nombre: "Ana".to_string(),
            email: "a@b.com".to_string(),
            rol,
        }
    }

    fn pedido(id: i64, numero: &str, delivery_id: i64) -> Pedido {
        Pedido {
            id,
            numero_pedido: numero.to_string(),
            fecha_pedido: "2024-11-01".to_string(),
            fecha_despacho: None,
            fecha_entrega: None,
            estado: 0,
            delivery_id,
            productos: Vec::new(),
        }
    }

    #[test]
    fn delivery_solo_ve_sus_pedidos() {
        let lista = vec![
            pedido(1, "P-001", 7),
            pedido(2, "P-002", 9),
            pedido(3, "P-003", 7),
        ];
        let visibles = filtrar_pedidos(&lista, &usuario(7, Rol::Delivery), "");

        assert_eq!(visibles.len(), 2);
        assert!(visibles.iter().all(|p| p.delivery_id == 7));
    }

    #[test]
    fn encargado_y_vendedor_ven_todo() {
        let lista = vec![pedido(1, "P-001", 7), pedido(2, "P-002", 9)];

        assert_eq!(
            filtrar_pedidos(&lista, &usuario(1, Rol::Encargado), "").len(),
            2
        );
        assert_eq!(
            filtrar_pedidos(&lista, &usuario(2, Rol::Vendedor), "").len(),
            2
        );
    }

    #[test]
    fn la_busqueda_filtra_por_numero() {
        let lista = vec![
            pedido(1, "P-001", 7),
            pedido(2, "P-012", 7),
            pedido(3, "Q-999", 7),
        ];
        let visibles = filtrar_pedidos(&lista, &usuario(1, Rol::Encargado), "P-0");

        assert_eq!(visibles.len(), 2);
    }

    #[test]
    fn busqueda_vacia_no_filtra() {
        let lista = vec![pedido(1, "P-001", 7)];
        assert_eq!(
            filtrar_pedidos(&lista, &usuario(1, Rol::Vendedor), "").len(),
            1
        );
    }
}
