// ============================================================================
// PANEL DE PEDIDOS - Cliente administrativo (Yew + WASM)
// ============================================================================
// Flujo: AuthProvider mantiene la sesión → el guard la lee al navegar →
// el router renderiza la vista permitida → la vista consume su provider
// de datos → el provider llama a la API con el token adjunto.
// ============================================================================

mod components;
mod hooks;
mod models;
mod routes;
mod services;
mod stores;
mod utils;
mod views;

use yew::prelude::*;
use yew_router::prelude::*;

use hooks::{AuthProvider, PedidosProvider};
use routes::{cambiar_ruta, Ruta};

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <PedidosProvider>
                    <Switch<Ruta> render={cambiar_ruta} />
                </PedidosProvider>
            </BrowserRouter>
        </AuthProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Panel de Pedidos iniciando...");

    yew::Renderer::<App>::new().render();
}
