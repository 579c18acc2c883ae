use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::{puesto_para_rol, NuevoUsuario, Usuario};
use crate::routes::Ruta;
use crate::services::ApiClient;
use crate::utils::alerta;

/// Valores del formulario tal como los escribe el usuario; la conversión
/// a tipos de la API ocurre al enviar, como en el resto de pantallas CRUD.
#[derive(Clone, PartialEq, Default)]
struct Formulario {
    codigo_trabajador: String,
    nombre: String,
    email: String,
    telefono: String,
    rol: String,
    estado: String,
    password: String,
}

impl Formulario {
    fn desde(usuario: &Usuario) -> Self {
        Self {
            codigo_trabajador: usuario.codigo_trabajador.clone(),
            nombre: usuario.nombre.clone(),
            email: usuario.email.clone(),
            telefono: usuario.telefono.clone(),
            rol: usuario.rol.to_string(),
            estado: usuario.estado.to_string(),
            // Vacío para que se reingrese la contraseña si hace falta
            password: String::new(),
        }
    }

    fn a_nuevo_usuario(&self) -> Result<NuevoUsuario, String> {
        if self.codigo_trabajador.is_empty()
            || self.nombre.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
        {
            return Err("Completa los campos requeridos".to_string());
        }

        let rol: i32 = self.rol.parse().map_err(|_| "Rol requerido".to_string())?;
        let estado: i32 = self.estado.parse().unwrap_or(0);

        Ok(NuevoUsuario {
            codigo_trabajador: self.codigo_trabajador.clone(),
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            rol,
            estado,
            puesto: puesto_para_rol(rol).to_string(),
            password: self.password.clone(),
        })
    }
}

#[function_component(Usuarios)]
pub fn usuarios() -> Html {
    let auth = use_auth();
    let lista = use_state(Vec::<Usuario>::new);
    let cargando = use_state(|| false);
    let editando = use_state(|| None::<i64>);
    let form = use_state(Formulario::default);

    let api = ApiClient::new(auth.token());

    let cargar = {
        let lista = lista.clone();
        let cargando = cargando.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let lista = lista.clone();
            let cargando = cargando.clone();
            let api = api.clone();
            spawn_local(async move {
                cargando.set(true);
                match api.get_usuarios().await {
                    Ok(usuarios) => lista.set(usuarios),
                    Err(e) => {
                        log::error!("❌ Error cargando usuarios: {}", e);
                        alerta("Error al cargar los usuarios");
                    }
                }
                cargando.set(false);
            });
        })
    };

    {
        let cargar = cargar.clone();
        use_effect_with((), move |_| {
            cargar.emit(());
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

    let editar_sel = {
        let form = form.clone();
        move |aplicar: fn(&mut Formulario, String)| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let mut datos = (*form).clone();
                aplicar(&mut datos, select.value());
                form.set(datos);
            })
        }
    };

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let editando = editando.clone();
        let cargar = cargar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let datos = match form.a_nuevo_usuario() {
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
                    Some(id) => api.actualizar_usuario(id, &datos).await,
                    None => api.crear_usuario(&datos).await,
                };

                match resultado {
                    Ok(()) => {
                        alerta(if editando.is_some() {
                            "Usuario actualizado exitosamente"
                        } else {
                            "Usuario creado exitosamente"
                        });
                        form.set(Formulario::default());
                        editando.set(None);
                        cargar.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando usuario: {}", e);
                        alerta("Error al procesar la solicitud");
                    }
                }
            });
        })
    };

    let on_editar = {
        let form = form.clone();
        let editando = editando.clone();
        Callback::from(move |usuario: Usuario| {
            editando.set(Some(usuario.id));
            form.set(Formulario::desde(&usuario));
        })
    };

    let on_eliminar = {
        let api = api.clone();
        let cargar = cargar.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match api.eliminar_usuario(id).await {
                    Ok(()) => {
                        alerta("Usuario eliminado exitosamente");
                        cargar.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando usuario {}: {}", id, e);
                        alerta("Error al eliminar el usuario");
                    }
                }
            });
        })
    };

    let filas = (*lista)
        .iter()
        .map(|usuario| {
            let on_editar = on_editar.clone();
            let on_eliminar = on_eliminar.clone();
            let usuario_clon = usuario.clone();
            let id = usuario.id;
            html! {
                <tr key={usuario.id.to_string()}>
                    <td>{ &usuario.codigo_trabajador }</td>
                    <td>{ &usuario.nombre }</td>
                    <td>{ &usuario.email }</td>
                    <td>{ &usuario.telefono }</td>
                    <td>{ puesto_para_rol(usuario.rol) }</td>
                    <td>
                        <button
                            class="btn btn-warning btn-sm me-2"
                            onclick={Callback::from(move |_| on_editar.emit(usuario_clon.clone()))}
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
            <h2 class="text-center mb-4">{"Gestión de Usuarios"}</h2>
            <Link<Ruta> to={Ruta::Dashboard} classes="btn btn-secondary mb-3">
                {"Volver"}
            </Link<Ruta>>

            <form onsubmit={on_submit} class="mb-4">
                <div class="row">
                    <div class="col-md-4 mb-3">
                        <label class="form-label">{"Código de Trabajador"}</label>
                        <input
                            class="form-control"
                            value={form.codigo_trabajador.clone()}
                            oninput={editar(|f, v| f.codigo_trabajador = v)}
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
                        <label class="form-label">{"Email"}</label>
                        <input
                            type="email"
                            class="form-control"
                            value={form.email.clone()}
                            oninput={editar(|f, v| f.email = v)}
                        />
                    </div>
                </div>
                <div class="row">
                    <div class="col-md-3 mb-3">
                        <label class="form-label">{"Teléfono"}</label>
                        <input
                            class="form-control"
                            value={form.telefono.clone()}
                            oninput={editar(|f, v| f.telefono = v)}
                        />
                    </div>
                    <div class="col-md-3 mb-3">
                        <label class="form-label">{"Rol"}</label>
                        <select
                            class="form-control"
                            value={form.rol.clone()}
                            onchange={editar_sel(|f, v| f.rol = v)}
                        >
                            <option value="">{"Seleccionar Rol"}</option>
                            <option value="0">{"Encargado"}</option>
                            <option value="1">{"Vendedor"}</option>
                            <option value="2">{"Delivery"}</option>
                        </select>
                    </div>
                    <div class="col-md-3 mb-3">
                        <label class="form-label">{"Estado"}</label>
                        <select
                            class="form-control"
                            value={form.estado.clone()}
                            onchange={editar_sel(|f, v| f.estado = v)}
                        >
                            <option value="0">{"Activo"}</option>
                            <option value="1">{"Inactivo"}</option>
                        </select>
                    </div>
                    <div class="col-md-3 mb-3">
                        <label class="form-label">{"Contraseña"}</label>
                        <input
                            type="password"
                            class="form-control"
                            value={form.password.clone()}
                            oninput={editar(|f, v| f.password = v)}
                        />
                    </div>
                </div>
                <button type="submit" class="btn btn-success">
                    { if editando.is_some() { "Actualizar Usuario" } else { "Crear Usuario" } }
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
                            <th>{"Código"}</th>
                            <th>{"Nombre"}</th>
                            <th>{"Email"}</th>
                            <th>{"Teléfono"}</th>
                            <th>{"Puesto"}</th>
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

    #[test]
    fn formulario_valido_deriva_el_puesto_del_rol() {
        let form = Formulario {
            codigo_trabajador: "TRB-01".to_string(),
            nombre: "Ana".to_string(),
            email: "a@b.com".to_string(),
            telefono: "999".to_string(),
            rol: "1".to_string(),
            estado: "0".to_string(),
            password: "secreto".to_string(),
        };

        let datos = form.a_nuevo_usuario().unwrap();
        assert_eq!(datos.rol, 1);
        assert_eq!(datos.puesto, "Vendedor");
    }

    #[test]
    fn formulario_sin_rol_es_error() {
        let form = Formulario {
            codigo_trabajador: "TRB-01".to_string(),
            nombre: "Ana".to_string(),
            email: "a@b.com".to_string(),
            password: "secreto".to_string(),
            ..Formulario::default()
        };

        assert!(form.a_nuevo_usuario().is_err());
    }

    #[test]
    fn editar_no_precarga_la_contraseña() {
        let usuario = Usuario {
            id: 3,
            codigo_trabajador: "TRB-03".to_string(),
            nombre: "Luis".to_string(),
            email: "l@b.com".to_string(),
            telefono: String::new(),
            rol: 2,
            estado: 0,
            puesto: "Delivery".to_string(),
        };

        let form = Formulario::desde(&usuario);
        assert_eq!(form.rol, "2");
        assert!(form.password.is_empty());
    }
}
