use dioxus::prelude::*;
use nexus_types::auth::Role;

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{CommunityCard, ErrorNotice, Loader, RoleGate},
    Routes,
};

/// Community hub: every community, with join and open.
#[component]
pub fn CommunitiesPage() -> Element {
    let api = use_api();
    let mut communities = use_load("communities", {
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_communities().await }
        }
    });
    let mut joined = use_load("joined communities", move || {
        let api = api.clone();
        async move {
            let profile = api.profile().await?;
            Ok(profile.user.communities_joined.into_iter().map(|c| c.id).collect::<Vec<_>>())
        }
    });
    let joined_ids = joined.read().as_ref().and_then(|r| r.as_ref().ok()).cloned().unwrap_or_default();

    rsx! {
        div { class: "flex items-center justify-between mb-6",
            h1 { class: "text-3xl font-bold", "Community Hub" }
            RoleGate { role: Role::Admin,
                Link { class: "btn btn-primary", to: Routes::CreateCommunityPage {}, "Create Community" }
            }
        }
        match LoadState::of(&communities) {
            LoadState::Loading => rsx! { Loader { label: "Loading communities..." } },
            LoadState::Failed(message) => rsx! {
                ErrorNotice { message, on_retry: move |_| communities.restart() }
            },
            LoadState::Loaded(list) if list.is_empty() => rsx! { p { class: "opacity-70", "No communities yet." } },
            LoadState::Loaded(list) => rsx! {
                div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                    for community in list {
                        CommunityCard {
                            key: "{community.id}",
                            joined: joined_ids.contains(&community.id),
                            community: community.clone(),
                            on_joined: move |_| {
                                communities.restart();
                                joined.restart();
                            },
                        }
                    }
                }
            },
        }
    }
}
