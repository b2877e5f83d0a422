use dioxus::prelude::*;
use nexus_types::users::{rank_label, LeaderboardEntry, LeaderboardSort};

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, Loader},
};

#[component]
pub fn LeaderboardPage() -> Element {
    let api = use_api();
    let mut sort = use_signal(LeaderboardSort::default);
    let mut leaderboard = use_load("leaderboard", move || {
        let api = api.clone();
        async move { api.leaderboard().await }
    });

    let entries = match LoadState::of(&leaderboard) {
        LoadState::Loading => return rsx! { Loader { label: "Loading leaderboard..." } },
        LoadState::Failed(message) => {
            return rsx! {
                ErrorNotice { message, on_retry: move |_| leaderboard.restart() }
            }
        }
        LoadState::Loaded(mut entries) => {
            sort().apply(&mut entries);
            entries
        }
    };
    let podium: Vec<LeaderboardEntry> = entries.iter().take(3).cloned().collect();

    rsx! {
        h1 { class: "text-3xl font-bold mb-2 text-center", "🏆 Leaderboard" }
        p { class: "text-center opacity-70 mb-6", "Top contributors across all communities" }

        div { class: "flex justify-center gap-2 mb-8",
            for choice in LeaderboardSort::ALL {
                button {
                    class: if sort() == choice { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                    onclick: move |_| sort.set(choice),
                    "{choice.label()}"
                }
            }
        }

        if entries.is_empty() {
            p { class: "text-center opacity-70", "No rankings yet." }
        }

        div { class: "flex flex-wrap justify-center gap-4 mb-8",
            for (index, entry) in podium.into_iter().enumerate() {
                div { key: "{entry.id}", class: "card bg-base-200 shadow-md w-56",
                    div { class: "card-body items-center text-center",
                        div { class: "text-4xl", "{rank_label(index + 1)}" }
                        div { class: "avatar placeholder",
                            div { class: "bg-neutral text-neutral-content rounded-full w-14",
                                span { class: "text-xl", "{entry.initial()}" }
                            }
                        }
                        h3 { class: "font-semibold", "{entry.name}" }
                        p { class: "text-2xl font-bold", "{entry.points} pts" }
                    }
                }
            }
        }

        div { class: "overflow-x-auto",
            table { class: "table",
                thead {
                    tr {
                        th { "Rank" }
                        th { "Name" }
                        th { "Points" }
                        th { "Events" }
                        th { "Certificates" }
                        th { "Badges" }
                    }
                }
                tbody {
                    for (index, entry) in entries.into_iter().enumerate() {
                        tr { key: "{entry.id}",
                            td { "{rank_label(index + 1)}" }
                            td { "{entry.name}" }
                            td { "{entry.points}" }
                            td { "{entry.events_attended}" }
                            td { "{entry.certificates}" }
                            td { "{entry.badges}" }
                        }
                    }
                }
            }
        }
    }
}
