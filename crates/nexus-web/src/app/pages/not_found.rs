use dioxus::prelude::*;

use crate::Routes;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div { class: "hero min-h-[50vh]",
            div { class: "hero-content text-center flex-col",
                h1 { class: "text-4xl font-bold", "404" }
                p { "Not found: /{path}" }
                Link { class: "btn btn-primary", to: Routes::LandingPage {}, "Back to Home" }
            }
        }
    }
}
