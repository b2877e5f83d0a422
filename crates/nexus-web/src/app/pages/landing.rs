use dioxus::prelude::*;
use nexus_types::{auth::Role, events::EventSearch};

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{CommunityCard, ErrorNotice, EventCard, Loader, RoleGate},
    Routes,
};

#[component]
pub fn LandingPage() -> Element {
    let api = use_api();
    let mut search_term = use_signal(String::new);
    let mut applied_search = use_signal(EventSearch::default);

    let communities = use_load("communities", {
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_communities().await }
        }
    });
    let events = use_load("events", {
        let api = api.clone();
        move || {
            let api = api.clone();
            let search = applied_search();
            async move { api.list_events(&search).await }
        }
    });
    // Ids of the communities the visitor belongs to; empty when signed out.
    let mut joined = use_load("joined communities", move || {
        let api = api.clone();
        async move {
            if !api.has_token() {
                return Ok(Vec::new());
            }
            let profile = api.profile().await?;
            Ok(profile.user.communities_joined.into_iter().map(|c| c.id).collect::<Vec<_>>())
        }
    });
    let joined_ids = joined.read().as_ref().and_then(|r| r.as_ref().ok()).cloned().unwrap_or_default();

    let mut communities_reload = communities;

    rsx! {
        section { class: "hero min-h-[40vh] bg-base-200 rounded-box mb-8",
            div { class: "hero-content text-center flex-col",
                h1 { class: "text-4xl font-bold",
                    "Empowering communities to create impactful events that inspire connection and engagement"
                }
                p { class: "opacity-80", "Unite Your Community with Seamless Event Planning." }
                RoleGate { role: Role::Admin,
                    fallback: rsx! {
                        Link { class: "btn btn-primary btn-lg", to: Routes::EventsPage {}, "Explore events" }
                    },
                    Link { class: "btn btn-primary btn-lg", to: Routes::AdminDashboardPage {}, "Create your first event" }
                }
            }
        }

        section { class: "mb-8",
            div { class: "join w-full max-w-xl",
                input {
                    class: "input input-bordered join-item w-full",
                    placeholder: "Search events...",
                    value: "{search_term}",
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button {
                    class: "btn btn-primary join-item",
                    onclick: move |_| applied_search.set(EventSearch { search: search_term(), ..Default::default() }),
                    "Search"
                }
            }
        }

        section { class: "mb-8",
            h2 { class: "text-2xl font-semibold mb-4", "Communities" }
            match LoadState::of(&communities) {
                LoadState::Loading => rsx! { Loader {} },
                LoadState::Failed(message) => rsx! { ErrorNotice { message } },
                LoadState::Loaded(list) if list.is_empty() => rsx! { p { class: "opacity-70", "No communities yet." } },
                LoadState::Loaded(list) => rsx! {
                    div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for (community, is_member) in list.into_iter().map(|c| {
                            let is_member = joined_ids.contains(&c.id);
                            (c, is_member)
                        }) {
                            CommunityCard {
                                key: "{community.id}",
                                joined: is_member,
                                community: community.clone(),
                                on_joined: move |_| {
                                    communities_reload.restart();
                                    joined.restart();
                                },
                            }
                        }
                    }
                },
            }
        }

        section {
            h2 { class: "text-2xl font-semibold mb-4", "Events" }
            match LoadState::of(&events) {
                LoadState::Loading => rsx! { Loader {} },
                LoadState::Failed(message) => rsx! { ErrorNotice { message } },
                LoadState::Loaded(list) if list.is_empty() => rsx! { p { class: "opacity-70", "No events found." } },
                LoadState::Loaded(list) => rsx! {
                    div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for event in list {
                            EventCard { key: "{event.id}", event: event.clone() }
                        }
                    }
                },
            }
        }
    }
}
