use dioxus::prelude::*;
use nexus_types::auth::Role;

use crate::{
    app::auth::RouteAccess,
    components::Shell,
    pages::{
        AdminDashboardPage, CommunitiesPage, CommunityPage, CreateCommunityPage, CreateEventPage, EditEventPage,
        EventDetailsPage, EventRegistrationPage, EventsPage, LandingPage, LeaderboardPage, LoginPage, NotFound,
        ProfilePage, RegisterPage, StudentHomePage, UnauthorizedPage,
    },
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Routes {
    #[layout(Shell)]
        #[route("/")]
        LandingPage {},
        #[route("/login")]
        LoginPage {},
        #[route("/register")]
        RegisterPage {},
        #[route("/unauthorized")]
        UnauthorizedPage {},

        #[route("/communities")]
        CommunitiesPage {},
        #[route("/community/:id")]
        CommunityPage { id: String },
        #[route("/events")]
        EventsPage {},
        #[route("/event/:id")]
        EventDetailsPage { id: String },
        #[route("/event/:id/register")]
        EventRegistrationPage { id: String },
        #[route("/leaderboard")]
        LeaderboardPage {},
        #[route("/profile")]
        ProfilePage {},

        #[route("/create-community")]
        CreateCommunityPage {},
        #[route("/community/:id/create-event")]
        CreateEventPage { id: String },
        #[route("/event/:id/edit")]
        EditEventPage { id: String },
        #[route("/admin/dashboard")]
        AdminDashboardPage {},

        #[route("/student/home")]
        StudentHomePage {},

        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

impl Routes {
    /// Session requirements of each path. The layout wraps every non-public
    /// route in the guard with this requirement.
    pub fn access(&self) -> RouteAccess {
        match self {
            Routes::LandingPage {}
            | Routes::LoginPage {}
            | Routes::RegisterPage {}
            | Routes::UnauthorizedPage {}
            | Routes::NotFound { .. } => RouteAccess::Public,

            Routes::CommunitiesPage {}
            | Routes::CommunityPage { .. }
            | Routes::EventsPage {}
            | Routes::EventDetailsPage { .. }
            | Routes::EventRegistrationPage { .. }
            | Routes::LeaderboardPage {}
            | Routes::ProfilePage {} => RouteAccess::Authenticated,

            Routes::CreateCommunityPage {}
            | Routes::CreateEventPage { .. }
            | Routes::EditEventPage { .. }
            | Routes::AdminDashboardPage {} => RouteAccess::Role(Role::Admin),

            Routes::StudentHomePage {} => RouteAccess::Role(Role::Student),
        }
    }
}
