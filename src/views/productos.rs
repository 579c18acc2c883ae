use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::{NuevoProducto, Producto};
use crate::routes::Ruta;
use crate::services::ApiClient;
use crate::utils::alerta;

#[derive(Clone, PartialEq, Default)]
struct Formulario {
    sku: String,
    nombre: String,
    tipo: String,
    etiqueta: String,
    precio: String,
    unidad_stock: String,
}

impl Formulario {
    fn desde(producto: &Producto) -> Self {
        Self {
            sku: producto.sku.clone(),
            nombre: producto.nombre.clone(),
            tipo: producto.tipo.clone(),
            etiqueta: producto.etiqueta.clone(),
            precio: producto.precio.to_string(),
            unidad_stock: producto.unidad_stock.to_string(),
        }
    }

    fn a_nuevo_producto(&self) -> Result<NuevoProducto, String> {
        if self.sku.is_empty() || self.nombre.is_empty() || self.tipo.is_empty() {
            return Err("Completa los campos requeridos".to_string());
        }

        let precio: f64 = self
            .precio
            .parse()
            .map_err(|_| "Precio inválido".to_string())?;
        if precio <= 0.0 {
            return Err("El precio debe ser positivo".to_string());
        }

        let unidad_stock: i32 = self
            .unidad_stock
            .parse()
            .map_err(|_| "Stock inválido".to_string())?;
        if unidad_stock <= 0 {
            return Err("El stock debe ser un entero positivo".to_string());
        }

        Ok(NuevoProducto {
            sku: self.sku.clone(),
            nombre: self.nombre.clone(),
            tipo: self.tipo.clone(),
            etiqueta: self.etiqueta.clone(),
            precio,
            unidad_stock,
        })
    }
}

#[function_component(Productos)]
pub fn productos() -> Html {
    let auth = use_auth();
    let lista = use_state(Vec::<Producto>::new);
    let cargando = use_state(|| false);
    let editando = use_state(|| None::<i64>);
    let form = use_state(Formulario::default);
    let criterio = use_state(String::new);

    let api = ApiClient::new(auth.token());

    // Carga la lista, completa o filtrada por criterio de búsqueda
    let cargar = {
        let lista = lista.clone();
        let cargando = cargando.clone();
        let api = api.clone();
        Callback::from(move |criterio: String| {
            let lista = lista.clone();
            let cargando = cargando.clone();
            let api = api.clone();
            spawn_local(async move {
                cargando.set(true);
                let resultado = if criterio.is_empty() {
                    api.get_productos().await
                } else {
                    api.buscar_productos(&criterio).await
                };
                match resultado {
                    Ok(productos) => lista.set(productos),
                    Err(e) => {
                        log::error!("❌ Error cargando productos: {}", e);
                        alerta("Error al cargar los productos");
                    }
                }
                cargando.set(false);
            });
        })
    };

    {
        let cargar = cargar.clone();
        use_effect_with((), move |_| {
            cargar.emit(String::new());
            || ()
        });
    }

    let editar = {
        let form = form.clone();
        move |aplicar: fn(&mut Formulario, String)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut datos = (*form).clone();
                aplicar(&mut datos, input.value());
                form.set(datos);
            })
        }
    };

    let on_criterio_change = {
        let criterio = criterio.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            criterio.set(input.value());
        })
    };

    let on_buscar = {
        let cargar = cargar.clone();
        let criterio = criterio.clone();
        Callback::from(move |_: MouseEvent| {
            cargar.emit((*criterio).clone());
        })
    };

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let editando = editando.clone();
        let cargar = cargar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let datos = match form.a_nuevo_producto() {
                Ok(datos) => datos,
                Err(mensaje) => {
                    alerta(&mensaje);
                    return;
                }
            };

            let api = api.clone();
            let form = form.clone();
            let editando = editando.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let resultado = match *editando {
                    Some(id) => api.actualizar_producto(id, &datos).await,
                    None => api.crear_producto(&datos).await,
                };

                match resultado {
                    Ok(()) => {
                        alerta(if editando.is_some() {
                            "Producto actualizado exitosamente"
                        } else {
                            "Producto creado exitosamente"
                        });
                        form.set(Formulario::default());
                        editando.set(None);
                        cargar.emit(String::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando producto: {}", e);
                        alerta("Error al procesar la solicitud");
                    }
                }
            });
        })
    };

    let on_editar = {
        let form = form.clone();
        let editando = editando.clone();
        Callback::from(move |producto: Producto| {
            editando.set(Some(producto.id));
            form.set(Formulario::desde(&producto));
        })
    };

    let on_eliminar = {
        let api = api.clone();
        let cargar = cargar.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match api.eliminar_producto(id).await {
                    Ok(()) => {
                        alerta("Producto eliminado exitosamente");
                        cargar.emit(String::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando producto {}: {}", id, e);
                        alerta("Error al eliminar el producto");
                    }
                }
            });
        })
    };

    let filas = (*lista)
        .iter()
        .map(|producto| {
            let on_editar = on_editar.clone();
            let on_eliminar = on_eliminar.clone();
            let producto_clon = producto.clone();
            let id = producto.id;
            html! {
                <tr key={producto.id.to_string()}>
                    <td>{ &producto.sku }</td>
                    <td>{ &producto.nombre }</td>
                    <td>{ &producto.tipo }</td>
                    <td>{ &producto.etiqueta }</td>
                    <td>{ format!("${:.2}", producto.precio) }</td>
                    <td>{ producto.unidad_stock }</td>
                    <td>
                        <button
                            class="btn btn-warning btn-sm me-2"
                            onclick={Callback::from(move |_| on_editar.emit(producto_clon.clone()))}
                        >
                            {"Editar"}
                        </button>
                        <button
                            class="btn btn-danger btn-sm"
                            onclick={Callback::from(move |_| on_eliminar.emit(id))}
                        >
                            {"Eliminar"}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container mt-4">
            <h2 class="text-center mb-4">{"Gestión de Productos"}</h2>
            <div class="d-flex justify-content-between mb-3">
                <Link<Ruta> to={Ruta::Dashboard} classes="btn btn-secondary">
                    {"Volver"}
                </Link<Ruta>>
                <div class="input-group w-50">
                    <input
                        class="form-control"
                        placeholder="Buscar productos"
                        value={(*criterio).clone()}
                        oninput={on_criterio_change}
                    />
                    <button class="btn btn-primary" onclick={on_buscar}>
                        {"Buscar"}
                    </button>
                </div>
            </div>

            <form onsubmit={on_submit} class="mb-4">
                <div class="row">
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"SKU"}</label>
                        <input
                            class="form-control"
                            value={form.sku.clone()}
                            oninput={editar(|f, v| f.sku = v)}
                        />
                    </div>
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Nombre"}</label>
                        <input
                            class="form-control"
                            value={form.nombre.clone()}
                            oninput={editar(|f, v| f.nombre = v)}
                        />
                    </div>
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Tipo"}</label>
                        <input
                            class="form-control"
                            value={form.tipo.clone()}
                            oninput={editar(|f, v| f.tipo = v)}
                        />
                    </div>
                </div>
                <div class="row">
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Etiqueta"}</label>
                        <input
                            class="form-control"
                            value={form.etiqueta.clone()}
                            oninput={editar(|f, v| f.etiqueta = v)}
                        />
                    </div>
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Precio"}</label>
                        <input
                            type="number"
                            step="0.01"
                            class="form-control"
                            value={form.precio.clone()}
                            oninput={editar(|f, v| f.precio = v)}
                        />
                    </div>
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Unidad de Stock"}</label>
                        <input
                            type="number"
                            class="form-control"
                            value={form.unidad_stock.clone()}
                            oninput={editar(|f, v| f.unidad_stock = v)}
                        />
                    </div>
                </div>
                <button type="submit" class="btn btn-success">
                    { if editando.is_some() { "Actualizar Producto" } else { "Crear Producto" } }
                </button>
            </form>

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
                            <th>{"SKU"}</th>
                            <th>{"Nombre"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Etiqueta"}</th>
                            <th>{"Precio"}</th>
                            <th>{"Stock"}</th>
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

    fn form_valido() -> Formulario {
        Formulario {
            sku: "SKU-1".to_string(),
            nombre: "Caja".to_string(),
            tipo: "Empaque".to_string(),
            etiqueta: "fragil".to_string(),
            precio: "10.5".to_string(),
            unidad_stock: "20".to_string(),
        }
    }

    #[test]
    fn formulario_valido_convierte_numeros() {
        let datos = form_valido().a_nuevo_producto().unwrap();
        assert!((datos.precio - 10.5).abs() < f64::EPSILON);
        assert_eq!(datos.unidad_stock, 20);
    }

    #[test]
    fn precio_no_positivo_es_error() {
        let mut form = form_valido();
        form.precio = "0".to_string();
        assert!(form.a_nuevo_producto().is_err());

        form.precio = "-3".to_string();
        assert!(form.a_nuevo_producto().is_err());
    }

    #[test]
    fn stock_no_entero_es_error() {
        let mut form = form_valido();
        form.unidad_stock = "2.5".to_string();
        assert!(form.a_nuevo_producto().is_err());
    }
}
