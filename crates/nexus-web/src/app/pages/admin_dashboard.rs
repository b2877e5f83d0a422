use dioxus::prelude::*;
use nexus_types::{community::Community, users::AdminTab};

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, Loader, TabBar},
    pages::create_community::CommunityForm,
    Routes,
};

#[component]
pub fn AdminDashboardPage() -> Element {
    let api = use_api();
    let mut tab = use_signal(AdminTab::default);
    let mut communities = use_load("my communities", move || {
        let api = api.clone();
        async move { api.my_communities().await }
    });
    let active = AdminTab::ALL.iter().position(|t| *t == tab()).unwrap_or_default();

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Admin Dashboard" }

        TabBar {
            tabs: AdminTab::ALL.iter().map(AdminTab::label).collect::<Vec<_>>(),
            active,
            on_select: move |index: usize| tab.set(AdminTab::ALL[index]),
        }

        match tab() {
            AdminTab::Overview => rsx! {
                AdminStatsCards {}
                h2 { class: "text-xl font-semibold mt-6 mb-3", "Recent Communities" }
                CommunityList { state: LoadState::of(&communities), limit: 3 }
            },
            AdminTab::Communities => rsx! {
                CommunityList { state: LoadState::of(&communities) }
            },
            AdminTab::CreateCommunity => rsx! {
                div { class: "card bg-base-100 shadow max-w-2xl",
                    div { class: "card-body",
                        CommunityForm {
                            on_created: move |_| {
                                communities.restart();
                                tab.set(AdminTab::Communities);
                            },
                        }
                    }
                }
            },
            AdminTab::Analytics => rsx! {
                AdminStatsCards {}
                CommunityAnalytics { state: LoadState::of(&communities) }
            },
        }
    }
}

/// Platform totals from `GET /users/admin/stats`.
#[component]
pub fn AdminStatsCards() -> Element {
    let api = use_api();
    let mut stats = use_load("admin stats", move || {
        let api = api.clone();
        async move { api.admin_stats().await }
    });

    match LoadState::of(&stats) {
        LoadState::Loading => rsx! { Loader {} },
        LoadState::Failed(message) => rsx! {
            ErrorNotice { message, on_retry: move |_| stats.restart() }
        },
        LoadState::Loaded(stats) => rsx! {
            div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
                div { class: "stat",
                    div { class: "stat-title", "Total Students" }
                    div { class: "stat-value", "{stats.total_students}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Total Events" }
                    div { class: "stat-value", "{stats.total_events}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Community Members" }
                    div { class: "stat-value", "{stats.community_members}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Communities" }
                    div { class: "stat-value", "{stats.total_communities}" }
                }
            }
        },
    }
}

#[component]
fn CommunityList(state: LoadState<Vec<Community>>, limit: Option<usize>) -> Element {
    let list = match state {
        LoadState::Loading => return rsx! { Loader {} },
        LoadState::Failed(message) => return rsx! { ErrorNotice { message } },
        LoadState::Loaded(list) => list,
    };
    if list.is_empty() {
        return rsx! { p { class: "opacity-70", "You don't manage any communities yet." } };
    }

    rsx! {
        div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
            for community in list.into_iter().take(limit.unwrap_or(usize::MAX)) {
                div { key: "{community.id}", class: "card bg-base-100 shadow",
                    div { class: "card-body",
                        h3 { class: "card-title", "{community.name}" }
                        p { class: "text-sm opacity-70", "{community.college_name}" }
                        p { class: "text-sm", "{community.member_count()} members · {community.events.len()} events" }
                        div { class: "card-actions justify-end",
                            Link { class: "btn btn-sm", to: Routes::CommunityPage { id: community.id.clone() }, "View" }
                            Link { class: "btn btn-primary btn-sm", to: Routes::CreateEventPage { id: community.id.clone() }, "Create Event" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommunityAnalytics(state: LoadState<Vec<Community>>) -> Element {
    let Some(list) = state.loaded() else {
        return rsx! {};
    };

    rsx! {
        div { class: "overflow-x-auto mt-6",
            table { class: "table",
                thead {
                    tr {
                        th { "Community" }
                        th { "Members" }
                        th { "Events" }
                        th { "Announcements" }
                    }
                }
                tbody {
                    for community in list.iter() {
                        tr { key: "{community.id}",
                            td { "{community.name}" }
                            td { "{community.member_count()}" }
                            td { "{community.events.len()}" }
                            td { "{community.announcements.len()}" }
                        }
                    }
                }
            }
        }
    }
}
