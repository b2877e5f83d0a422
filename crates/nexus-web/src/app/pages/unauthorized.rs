use dioxus::prelude::*;

use crate::{app::auth::use_session, Routes};

/// Where the route guard sends signed-in visitors lacking the required role.
#[component]
pub fn UnauthorizedPage() -> Element {
    let session = use_session();
    let role = session.role().map_or("unknown", |r| r.as_str());

    rsx! {
        div { class: "hero min-h-[50vh]",
            div { class: "hero-content text-center flex-col",
                h1 { class: "text-3xl font-bold", "Access Denied" }
                p { "Your account ({role}) does not have permission to view this page." }
                div { class: "flex gap-2",
                    Link { class: "btn btn-primary", to: Routes::LandingPage {}, "Back to Home" }
                    Link { class: "btn btn-ghost", to: Routes::ProfilePage {}, "My Profile" }
                }
            }
        }
    }
}
