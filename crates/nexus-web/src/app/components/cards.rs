use chrono::Utc;
use dioxus::prelude::*;
use nexus_types::{community::Community, events};

use crate::{
    app::{api::use_api, auth::use_session, format, notify::alert},
    Routes,
};

/// Summary of an event with its status badge. `actions` renders in the
/// card footer next to the details link.
#[component]
pub fn EventCard(event: events::Event, actions: Option<Element>) -> Element {
    let status = event.status_at(Utc::now());
    let badge = match status {
        events::EventStatus::Upcoming => "badge-info",
        events::EventStatus::Ongoing => "badge-success",
        events::EventStatus::Completed => "badge-ghost",
    };
    let top_prize = event.prizes.first().map(|p| format::prize(p.amount));

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "card-title", "{event.name}" }
                    span { class: "badge {badge} uppercase", "{status.as_str()}" }
                }
                if !event.theme.is_empty() {
                    span { class: "badge badge-outline", "{event.theme}" }
                }
                p { class: "text-sm opacity-80 line-clamp-3", "{event.description}" }
                div { class: "text-sm",
                    p { strong { "Date: " } "{format::date_time(event.start_date)}" }
                    if !event.location.is_empty() {
                        p { strong { "Location: " } "{event.location}" }
                    }
                    p { strong { "Participants: " } "{event.participant_count()}" }
                    if let Some(prize) = top_prize {
                        p { strong { "Top prize: " } "{prize}" }
                    }
                }
                div { class: "card-actions justify-end",
                    if let Some(actions) = actions {
                        {actions}
                    }
                    Link { class: "btn btn-primary btn-sm", to: Routes::EventDetailsPage { id: event.id.clone() }, "View Details" }
                }
            }
        }
    }
}

/// Community summary with join and open buttons.
///
/// Joining while signed out sends the visitor to the login page.
#[component]
pub fn CommunityCard(community: Community, joined: bool, on_joined: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut joining = use_signal(|| false);
    let community_id = community.id.clone();

    let join = move |_: MouseEvent| {
        if !session.is_authenticated() {
            nav.push(Routes::LoginPage {});
            return;
        }
        joining.set(true);
        let api = api.clone();
        let community_id = community_id.clone();
        spawn(async move {
            match api.join_community(&community_id).await {
                Ok(()) => {
                    tracing::info!(community = %community_id, "joined community");
                    alert("Joined community successfully!");
                    on_joined.call(());
                }
                Err(err) => alert(&err.user_message("Failed to join community")),
            }
            joining.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body",
                h3 { class: "card-title", "{community.name}" }
                p { class: "text-sm opacity-70", "{community.college_name} · {community.category.label()}" }
                p { class: "text-sm line-clamp-3", "{community.description}" }
                p { class: "text-sm", "{community.member_count()} members" }
                div { class: "card-actions justify-end",
                    if joined {
                        span { class: "badge badge-success", "Member" }
                    } else {
                        button { class: "btn btn-secondary btn-sm", disabled: joining(), onclick: join, "Join" }
                    }
                    Link { class: "btn btn-primary btn-sm", to: Routes::CommunityPage { id: community.id.clone() }, "Open" }
                }
            }
        }
    }
}
