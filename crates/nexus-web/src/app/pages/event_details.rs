use chrono::Utc;
use dioxus::prelude::*;
use nexus_types::{auth::Role, events};

use crate::{
    app::{
        api::use_api,
        format,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, Loader, RoleGate},
    Routes,
};

#[component]
pub fn EventDetailsPage(id: String) -> Element {
    let api = use_api();
    let mut event = use_load(
        "event",
        use_reactive((&id,), move |(id,)| {
            let api = api.clone();
            async move { api.event(&id).await }
        }),
    );

    match LoadState::of(&event) {
        LoadState::Loading => rsx! { Loader { label: "Loading event..." } },
        LoadState::Failed(message) => rsx! {
            ErrorNotice { message, on_retry: move |_| event.restart() }
        },
        LoadState::Loaded(event) => rsx! { EventDetails { event } },
    }
}

#[component]
fn EventDetails(event: events::Event) -> Element {
    let now = Utc::now();
    let status = event.status_at(now);
    let open = event.registration_open_at(now);

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-3xl mx-auto",
            div { class: "card-body gap-4",
                div { class: "flex items-start justify-between gap-2",
                    h1 { class: "card-title text-3xl", "{event.name}" }
                    span { class: "badge badge-lg uppercase", "{status.as_str()}" }
                }
                if let Some(community) = &event.community_id {
                    p { class: "opacity-70",
                        Link { class: "link", to: Routes::CommunityPage { id: community.id().to_string() },
                            "{community.name().unwrap_or(\"View community\")}"
                        }
                        if let Some(college) = community.college_name() {
                            " · {college}"
                        }
                    }
                }
                if !event.theme.is_empty() {
                    span { class: "badge badge-outline", "{event.theme}" }
                }
                p { class: "whitespace-pre-line", "{event.description}" }

                div { class: "grid md:grid-cols-2 gap-2 text-sm",
                    p { strong { "Starts: " } "{format::date_time(event.start_date)}" }
                    p { strong { "Ends: " } "{format::date_time(event.end_date)}" }
                    p { strong { "Registration closes: " } "{format::date_time(event.registration_deadline)}" }
                    p { strong { "Location: " } "{event.location}" }
                    p { strong { "Participants: " } "{event.participant_count()}" }
                    if event.attendance_provided {
                        p { "✔ Attendance recorded" }
                    }
                    if event.certificates_provided {
                        p { "✔ Certificates provided" }
                    }
                }

                if !event.prizes.is_empty() {
                    div {
                        h2 { class: "font-semibold text-lg mb-2", "Prizes" }
                        ul { class: "list-disc list-inside",
                            for prize in event.prizes.iter() {
                                li { key: "{prize.position}", "Position {prize.position}: {format::prize(prize.amount)}" }
                            }
                        }
                    }
                }

                div { class: "card-actions justify-end",
                    RoleGate { role: Role::Admin,
                        Link { class: "btn btn-outline", to: Routes::EditEventPage { id: event.id.clone() }, "Edit Event" }
                    }
                    if open {
                        Link { class: "btn btn-primary", to: Routes::EventRegistrationPage { id: event.id.clone() }, "Register" }
                    } else {
                        button { class: "btn", disabled: true, "Registration closed" }
                    }
                }
            }
        }
    }
}
