use dioxus::prelude::*;

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, EventCard, Loader},
    Routes,
};

/// Student landing: joined communities and what is coming up next.
#[component]
pub fn StudentHomePage() -> Element {
    let api = use_api();
    let mut profile = use_load("profile", move || {
        let api = api.clone();
        async move { api.profile().await }
    });

    let data = match LoadState::of(&profile) {
        LoadState::Loading => return rsx! { Loader {} },
        LoadState::Failed(message) => {
            return rsx! {
                ErrorNotice { message, on_retry: move |_| profile.restart() }
            }
        }
        LoadState::Loaded(data) => data,
    };
    let upcoming: Vec<_> = data.events.ongoing.iter().chain(data.events.upcoming.iter()).cloned().collect();

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Welcome back, {data.user.name}" }

        section { class: "mb-8",
            div { class: "flex items-center justify-between mb-3",
                h2 { class: "text-xl font-semibold", "My Communities" }
                Link { class: "btn btn-sm", to: Routes::CommunitiesPage {}, "Browse all" }
            }
            if data.user.communities_joined.is_empty() {
                p { class: "opacity-70", "Join a community to see its events here." }
            }
            div { class: "flex flex-wrap gap-2",
                for community in data.user.communities_joined.iter() {
                    Link {
                        key: "{community.id}",
                        class: "btn btn-outline",
                        to: Routes::CommunityPage { id: community.id.clone() },
                        "{community.name}"
                    }
                }
            }
        }

        section {
            h2 { class: "text-xl font-semibold mb-3", "Ongoing & Upcoming" }
            if upcoming.is_empty() {
                p { class: "opacity-70", "Nothing scheduled. Explore events to register." }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for event in upcoming {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
        }
    }
}
