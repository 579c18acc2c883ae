use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::routes::Ruta;
use crate::utils::alerta;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("Login requiere un Router padre");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let enviando = use_state(|| false);

    // Si ya hay sesión, la raíz manda directo al dashboard
    if auth.esta_autenticado() {
        return html! { <Redirect<Ruta> to={Ruta::Dashboard} /> };
    }

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let enviando = enviando.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_val = (*email).clone();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                alerta("Por favor, completa todos los campos");
                return;
            }

            let auth = auth.clone();
            let enviando = enviando.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                enviando.set(true);
                match auth.login(email_val, password_val).await {
                    Ok(()) => navigator.push(&Ruta::Dashboard),
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        alerta("No se pudo iniciar sesión. Verifica tus credenciales.");
                    }
                }
                enviando.set(false);
            });
        })
    };

    html! {
        <div class="container d-flex justify-content-center align-items-center min-vh-100">
            <div class="card p-4 shadow-sm login-card">
                <h2 class="text-center mb-4">{"Iniciar Sesión"}</h2>
                <form onsubmit={on_submit}>
                    <div class="mb-3">
                        <label for="email" class="form-label">{"Correo Electrónico"}</label>
                        <input
                            type="email"
                            id="email"
                            class="form-control"
                            placeholder="Ingrese su correo"
                            value={(*email).clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="mb-3">
                        <label for="password" class="form-label">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            class="form-control"
                            placeholder="Ingrese su contraseña"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary w-100" disabled={*enviando}>
                        { if *enviando { "Ingresando..." } else { "Iniciar Sesión" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
