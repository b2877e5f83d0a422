use dioxus::prelude::*;
use nexus_types::{
    events,
    users::{Profile, ProfileTab},
};

use crate::{
    app::{
        api::use_api,
        auth::use_session,
        format,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, Loader, TabBar},
    pages::admin_dashboard::AdminStatsCards,
    Routes,
};

#[component]
pub fn ProfilePage() -> Element {
    let api = use_api();
    let session = use_session();
    let tabs = ProfileTab::for_role(session.role());
    let mut tab = use_signal(|| ProfileTab::Events);
    let mut profile = use_load("profile", move || {
        let api = api.clone();
        async move { api.profile().await }
    });

    let data = match LoadState::of(&profile) {
        LoadState::Loading => return rsx! { Loader { label: "Loading profile..." } },
        LoadState::Failed(message) => {
            return rsx! {
                ErrorNotice { message, on_retry: move |_| profile.restart() }
            }
        }
        LoadState::Loaded(data) => data,
    };
    let user = &data.user;
    let role = user.role.or(session.role()).map_or("member", |r| r.as_str());
    let active = tabs.iter().position(|t| *t == tab()).unwrap_or_default();

    rsx! {
        div { class: "card bg-base-200 mb-6",
            div { class: "card-body flex-row items-center gap-4",
                div { class: "avatar placeholder",
                    div { class: "bg-neutral text-neutral-content rounded-full w-20",
                        span { class: "text-3xl", "{user.initial()}" }
                    }
                }
                div {
                    h1 { class: "text-2xl font-bold", "{user.name}" }
                    p { class: "opacity-70", "{user.email}" }
                    if !user.college_name.is_empty() {
                        p { class: "opacity-70", "{user.college_name}" }
                    }
                    span { class: "badge badge-primary uppercase mt-2", "{role}" }
                }
            }
        }

        TabBar {
            tabs: tabs.iter().map(ProfileTab::label).collect::<Vec<_>>(),
            active,
            on_select: move |index: usize| {
                if let Some(selected) = tabs.get(index) {
                    tab.set(*selected);
                }
            },
        }

        match tabs.get(active).copied().unwrap_or(ProfileTab::Events) {
            ProfileTab::Events => rsx! { EventsTab { profile: data.clone() } },
            ProfileTab::Analytics => rsx! { AdminStatsCards {} },
            ProfileTab::Certificates => rsx! { CertificatesTab { profile: data.clone() } },
            ProfileTab::Badges => rsx! {
                if user.badges.is_empty() {
                    p { class: "opacity-70", "No badges earned yet." }
                }
                div { class: "grid gap-4 md:grid-cols-3",
                    for badge in user.badges.iter() {
                        div { key: "{badge.name}", class: "card bg-base-100 shadow-sm",
                            div { class: "card-body items-center text-center",
                                div { class: "text-3xl", "🏅" }
                                h3 { class: "font-semibold", "{badge.name}" }
                                p { class: "text-xs opacity-60", "Earned: {format::date(badge.earned_date)}" }
                            }
                        }
                    }
                }
            },
            ProfileTab::Activity => rsx! { ActivityTab {} },
            ProfileTab::Communities => rsx! {
                if user.communities_joined.is_empty() {
                    p { class: "opacity-70", "You haven't joined any communities yet." }
                }
                div { class: "grid gap-4 md:grid-cols-3",
                    for community in user.communities_joined.iter() {
                        Link {
                            key: "{community.id}",
                            class: "card bg-base-100 shadow-sm hover:shadow-md",
                            to: Routes::CommunityPage { id: community.id.clone() },
                            div { class: "card-body",
                                h3 { class: "font-semibold", "{community.name}" }
                                p { class: "text-sm opacity-70", "{community.college_name}" }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn EventsTab(profile: Profile) -> Element {
    let groups: [(&str, &Vec<events::Event>); 3] = [
        ("Ongoing", &profile.events.ongoing),
        ("Upcoming", &profile.events.upcoming),
        ("Completed", &profile.events.completed),
    ];

    rsx! {
        for (title, list) in groups {
            div { key: "{title}", class: "mb-6",
                h2 { class: "text-xl font-semibold mb-2", "{title} Events" }
                if list.is_empty() {
                    p { class: "opacity-70", "None" }
                }
                ul { class: "flex flex-col gap-2",
                    for event in list.iter() {
                        li { key: "{event.id}", class: "flex justify-between bg-base-100 rounded p-3",
                            Link { class: "link", to: Routes::EventDetailsPage { id: event.id.clone() }, "{event.name}" }
                            span { class: "text-sm opacity-70", "{format::date(event.start_date)} – {format::date(event.end_date)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CertificatesTab(profile: Profile) -> Element {
    let api = use_api();

    rsx! {
        if profile.user.certificates.is_empty() {
            p { class: "opacity-70", "No certificates earned yet." }
        }
        div { class: "grid gap-4 md:grid-cols-2",
            for cert in profile.user.certificates.iter() {
                div { key: "{cert.event_id}", class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "font-semibold", "📜 {cert.event_name}" }
                        p { class: "text-xs opacity-60", "Earned: {format::date(cert.earned_date)}" }
                        div { class: "card-actions justify-end",
                            a {
                                class: "btn btn-primary btn-sm",
                                href: api.certificate_url(&cert.event_id),
                                target: "_blank",
                                rel: "noopener",
                                "Download"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Recent activity, fetched when the tab is opened.
#[component]
fn ActivityTab() -> Element {
    let api = use_api();
    let mut activity = use_load("activity", move || {
        let api = api.clone();
        async move { api.activity().await }
    });

    match LoadState::of(&activity) {
        LoadState::Loading => rsx! { Loader {} },
        LoadState::Failed(message) => rsx! {
            ErrorNotice { message, on_retry: move |_| activity.restart() }
        },
        LoadState::Loaded(list) if list.is_empty() => rsx! { p { class: "opacity-70", "No recent activity." } },
        LoadState::Loaded(list) => rsx! {
            ul { class: "timeline timeline-vertical",
                for item in list {
                    li { class: "bg-base-100 rounded p-3 mb-2",
                        h3 { class: "font-semibold", "{item.title}" }
                        p { class: "text-xs opacity-60", "{format::date(item.date)} • {item.context()}" }
                    }
                }
            }
        },
    }
}
