use dioxus::prelude::*;
use nexus_types::auth::Role;

use crate::{app::auth::use_session, components::RoleGate, Routes};

#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let logged_in = session.is_authenticated();

    let logout = move |_: MouseEvent| {
        session.sign_out();
        tracing::info!("signed out");
        nav.push(Routes::LandingPage {});
    };

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                Link { class: "btn btn-ghost text-xl", to: Routes::LandingPage {}, "Nexus" }
                ul { class: "menu menu-horizontal px-1",
                    li { Link { to: Routes::LandingPage {}, "Home" } }
                    li { Link { to: Routes::CommunitiesPage {}, "Communities" } }
                    li { Link { to: Routes::EventsPage {}, "Events" } }
                    if !session.is_admin() {
                        li { Link { to: Routes::LeaderboardPage {}, "Leaderboard" } }
                    }
                    li { Link { to: Routes::ProfilePage {}, "Profile" } }
                    RoleGate { role: Role::Admin,
                        li { Link { to: Routes::AdminDashboardPage {}, "Dashboard" } }
                    }
                    RoleGate { role: Role::Student,
                        li { Link { to: Routes::StudentHomePage {}, "My Campus" } }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if logged_in {
                    button { class: "btn btn-outline btn-sm", onclick: logout, "Logout" }
                } else {
                    Link { class: "btn btn-primary btn-sm", to: Routes::LoginPage {}, "Login" }
                }
            }
        }
    }
}
