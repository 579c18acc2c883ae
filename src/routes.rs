// ============================================================================
// RUTAS - Tabla declarativa path → (vista, roles requeridos)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::RutaProtegida;
use crate::models::Rol;
use crate::views::{
    CrearPedido, Dashboard, DetallePedido, ListadoPedidos, Login, Productos, Usuarios,
};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Ruta {
    #[at("/")]
    Inicio,
    #[at("/dashboard")]
    Dashboard,
    #[at("/usuarios")]
    Usuarios,
    #[at("/productos")]
    Productos,
    #[at("/pedidos")]
    Pedidos,
    #[at("/pedidos/:id")]
    DetallePedido { id: i64 },
    #[at("/crear-pedido")]
    CrearPedido,
    #[not_found]
    #[at("/404")]
    NoEncontrada,
}

const CUALQUIER_ROL: &[Rol] = &[Rol::Encargado, Rol::Vendedor, Rol::Delivery];

impl Ruta {
    /// Conjunto de roles que puede ver la ruta; `None` = pública
    pub fn roles_requeridos(&self) -> Option<&'static [Rol]> {
        match self {
            Ruta::Inicio | Ruta::NoEncontrada => None,
            Ruta::Dashboard | Ruta::Pedidos | Ruta::DetallePedido { .. } => Some(CUALQUIER_ROL),
            Ruta::Usuarios | Ruta::Productos => Some(&[Rol::Encargado]),
            Ruta::CrearPedido => Some(&[Rol::Vendedor]),
        }
    }
}

/// Render del Switch: cada ruta protegida pasa por el guard antes de
/// renderizar su destino
pub fn cambiar_ruta(ruta: Ruta) -> Html {
    let destino = match &ruta {
        Ruta::Inicio => html! { <Login /> },
        Ruta::Dashboard => html! { <Dashboard /> },
        Ruta::Usuarios => html! { <Usuarios /> },
        Ruta::Productos => html! { <Productos /> },
        Ruta::Pedidos => html! { <ListadoPedidos /> },
        Ruta::DetallePedido { id } => html! { <DetallePedido id={*id} /> },
        Ruta::CrearPedido => html! { <CrearPedido /> },
        Ruta::NoEncontrada => html! { <Redirect<Ruta> to={Ruta::Inicio} /> },
    };

    match ruta.roles_requeridos() {
        None => destino,
        Some(roles) => html! {
            <RutaProtegida roles={Some(roles.to_vec())}>
                { destino }
            </RutaProtegida>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconoce_la_tabla_de_paths() {
        assert_eq!(Ruta::recognize("/"), Some(Ruta::Inicio));
        assert_eq!(Ruta::recognize("/dashboard"), Some(Ruta::Dashboard));
        assert_eq!(Ruta::recognize("/usuarios"), Some(Ruta::Usuarios));
        assert_eq!(Ruta::recognize("/productos"), Some(Ruta::Productos));
        assert_eq!(Ruta::recognize("/pedidos"), Some(Ruta::Pedidos));
        assert_eq!(
            Ruta::recognize("/pedidos/7"),
            Some(Ruta::DetallePedido { id: 7 })
        );
        assert_eq!(Ruta::recognize("/crear-pedido"), Some(Ruta::CrearPedido));
    }

    #[test]
    fn roles_por_ruta() {
        assert_eq!(Ruta::Inicio.roles_requeridos(), None);
        assert_eq!(Ruta::Dashboard.roles_requeridos(), Some(CUALQUIER_ROL));
        assert_eq!(
            Ruta::Usuarios.roles_requeridos(),
            Some(&[Rol::Encargado][..])
        );
        assert_eq!(
            Ruta::Productos.roles_requeridos(),
            Some(&[Rol::Encargado][..])
        );
        assert_eq!(Ruta::Pedidos.roles_requeridos(), Some(CUALQUIER_ROL));
        assert_eq!(
            Ruta::DetallePedido { id: 1 }.roles_requeridos(),
            Some(CUALQUIER_ROL)
        );
        assert_eq!(
            Ruta::CrearPedido.roles_requeridos(),
            Some(&[Rol::Vendedor][..])
        );
    }
}
