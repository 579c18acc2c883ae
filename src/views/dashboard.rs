use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::Rol;
use crate::routes::Ruta;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("Dashboard requiere un Router padre");

    // El guard garantiza sesión; si no la hay, no renderizamos nada
    let Some(usuario) = auth.usuario() else {
        return html! {};
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            navigator.push(&Ruta::Inicio);
        })
    };

    // Accesos según rol, con matching exhaustivo
    let accesos_de_rol = match usuario.rol {
        Rol::Encargado => html! {
            <>
                <div class="col-md-6 mb-3">
                    <Link<Ruta> to={Ruta::Usuarios} classes="btn btn-primary w-100">
                        {"Gestión de Usuarios"}
                    </Link<Ruta>>
                </div>
                <div class="col-md-6 mb-3">
                    <Link<Ruta> to={Ruta::Productos} classes="btn btn-primary w-100">
                        {"Gestión de Productos"}
                    </Link<Ruta>>
                </div>
            </>
        },
        Rol::Vendedor => html! {
            <div class="col-md-12 mb-3">
                <Link<Ruta> to={Ruta::CrearPedido} classes="btn btn-primary w-100">
                    {"Registro de Pedidos"}
                </Link<Ruta>>
            </div>
        },
        Rol::Delivery => html! {},
    };

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-8">
                    <div class="card p-4 shadow-sm">
                        <div class="d-flex justify-content-between align-items-center">
                            <h2>{ format!("Bienvenido, {}", usuario.nombre) }</h2>
                            <button class="btn btn-danger" onclick={on_logout}>
                                {"Cerrar Sesión"}
                            </button>
                        </div>
                        <p class="text-center text-muted">
                            { format!("Rol: {}", usuario.rol.etiqueta()) }
                        </p>
                        <hr />
                        <div class="row mt-4">
                            { accesos_de_rol }
                            <div class="col-md-12 mb-3">
                                <Link<Ruta> to={Ruta::Pedidos} classes="btn btn-secondary w-100">
                                    {"Listado de Pedidos"}
                                </Link<Ruta>>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
