use dioxus::prelude::*;

use crate::{
    app::auth::RouteAccess,
    components::{Footer, NavBar, RequireAuth},
    Routes,
};

/// Layout of every route. Non-public routes render behind the guard.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Routes>();
    let content = match route.access() {
        RouteAccess::Public => rsx! { Outlet::<Routes> {} },
        access => rsx! {
            RequireAuth { required_role: access.required_role(), Outlet::<Routes> {} }
        },
    };

    rsx! {
        div {
            class: "nx-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "nx-main flex-grow p-4", {
                    content
                }
            }
            Footer {}
        }
    }
}
