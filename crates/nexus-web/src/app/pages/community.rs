use dioxus::prelude::*;
use nexus_types::{
    auth::Role,
    community::{
        Announcement, AnnouncementRequest, Channel, ChatMessage, ChatPostRequest, CreateQueryRequest, IssueType, Query,
    },
    events,
    validation::ValidationError,
};

use crate::{
    app::{
        api::use_api,
        auth::use_session,
        format,
        loading::{use_load, LoadState},
        notify::alert,
    },
    components::{ErrorNotice, EventCard, Loader, QuickEditEvent, RoleGate, TabBar},
    Routes,
};

/// A community's channels. Each post re-fetches the whole community.
#[component]
pub fn CommunityPage(id: String) -> Element {
    let api = use_api();
    let mut detail = use_load(
        "community",
        use_reactive((&id,), move |(id,)| {
            let api = api.clone();
            async move { api.community(&id).await }
        }),
    );
    let mut channel = use_signal(Channel::default);
    let mut editing = use_signal(|| None::<events::Event>);

    let data = match LoadState::of(&detail) {
        LoadState::Loading => return rsx! { Loader { label: "Loading community..." } },
        LoadState::Failed(message) => {
            return rsx! {
                ErrorNotice { message, on_retry: move |_| detail.restart() }
            }
        }
        LoadState::Loaded(data) => data,
    };
    let community = data.community;
    let active = Channel::ALL.iter().position(|c| *c == channel()).unwrap_or_default();

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-3xl font-bold", "{community.name}" }
            p { class: "opacity-70", "{community.college_name} · {community.category.label()} · {community.member_count()} members" }
            p { class: "mt-2", "{community.description}" }
            if let Some(stats) = &community.stats {
                div { class: "stats shadow mt-4",
                    div { class: "stat", div { class: "stat-title", "Members" } div { class: "stat-value text-2xl", "{stats.total_members}" } }
                    div { class: "stat", div { class: "stat-title", "Events" } div { class: "stat-value text-2xl", "{stats.total_events}" } }
                    div { class: "stat", div { class: "stat-title", "Open queries" } div { class: "stat-value text-2xl", "{stats.pending_queries}" } }
                }
            }
        }

        TabBar {
            tabs: Channel::ALL.iter().map(Channel::label).collect::<Vec<_>>(),
            active,
            on_select: move |index: usize| channel.set(Channel::ALL[index]),
        }

        match channel() {
            Channel::Events => rsx! {
                EventsChannel {
                    community_id: community.id.clone(),
                    events: community.events.clone(),
                    on_edit: move |event| editing.set(Some(event)),
                }
            },
            Channel::Chat => rsx! {
                ChatChannel {
                    community_id: community.id.clone(),
                    messages: data.chat_messages.clone(),
                    on_posted: move |_| detail.restart(),
                }
            },
            Channel::Queries => rsx! {
                QueriesChannel {
                    community_id: community.id.clone(),
                    queries: data.queries.clone(),
                    on_posted: move |_| detail.restart(),
                }
            },
            Channel::Announcements => rsx! {
                AnnouncementsChannel {
                    community_id: community.id.clone(),
                    announcements: community.sorted_announcements().into_iter().cloned().collect::<Vec<_>>(),
                    on_posted: move |_| detail.restart(),
                }
            },
        }

        if let Some(event) = editing() {
            QuickEditEvent {
                event,
                on_close: move |_| editing.set(None),
                on_updated: move |_| detail.restart(),
            }
        }
    }
}

#[component]
fn EventsChannel(community_id: String, events: Vec<events::Event>, on_edit: EventHandler<events::Event>) -> Element {
    rsx! {
        div { class: "flex items-center justify-between mb-4",
            h2 { class: "text-2xl font-semibold", "Community Events" }
            RoleGate { role: Role::Admin,
                Link { class: "btn btn-primary btn-sm", to: Routes::CreateEventPage { id: community_id.clone() }, "+ Create Event" }
            }
        }
        if events.is_empty() {
            p { class: "opacity-70", "No events yet." }
        }
        div { class: "grid gap-4 md:grid-cols-2",
            for event in events {
                ChannelEvent { key: "{event.id}", event: event.clone(), on_edit }
            }
        }
    }
}

#[component]
fn ChannelEvent(event: events::Event, on_edit: EventHandler<events::Event>) -> Element {
    let editable = event.clone();
    rsx! {
        EventCard {
            event,
            actions: rsx! {
                RoleGate { role: Role::Admin,
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| on_edit.call(editable.clone()),
                        "Quick Edit"
                    }
                }
            },
        }
    }
}

#[component]
fn ChatChannel(community_id: String, messages: Vec<ChatMessage>, on_posted: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let send = move |evt: Event<FormData>| {
        evt.prevent_default();
        let message = draft().trim().to_string();
        if message.is_empty() || sending() {
            return;
        }
        sending.set(true);
        let api = api.clone();
        let community_id = community_id.clone();
        spawn(async move {
            match api.post_chat(&community_id, &ChatPostRequest { message }).await {
                Ok(()) => {
                    draft.set(String::new());
                    on_posted.call(());
                }
                Err(err) => alert(&err.user_message("Failed to send message")),
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "flex flex-col gap-2 max-h-[50vh] overflow-y-auto mb-4",
            if messages.is_empty() {
                p { class: "opacity-70", "No messages yet. Say hello!" }
            }
            for message in messages.iter() {
                div { key: "{message.id}", class: "chat chat-start",
                    div { class: "chat-header",
                        "{message.author_name()} "
                        if message.author.as_ref().is_some_and(|a| a.is_admin()) {
                            span { class: "badge badge-primary badge-xs", "admin" }
                        }
                        time { class: "text-xs opacity-50 ml-2", "{format::date_time(message.timestamp)}" }
                    }
                    div { class: "chat-bubble", "{message.message}" }
                }
            }
        }
        if Channel::Chat.can_write(session.role()) {
            form { class: "join w-full", onsubmit: send,
                input {
                    class: "input input-bordered join-item w-full",
                    placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn-primary join-item", disabled: sending(), "Send" }
            }
        }
    }
}

#[component]
fn QueriesChannel(community_id: String, queries: Vec<Query>, on_posted: EventHandler<()>) -> Element {
    let api = use_api();
    let mut issue_type = use_signal(IssueType::default);
    let mut description = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        if description().trim().is_empty() {
            alert(&ValidationError::Required("Description").to_string());
            return;
        }
        let request = CreateQueryRequest {
            community_id: community_id.clone(),
            issue_type: issue_type(),
            description: description(),
        };
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.submit_query(&request).await {
                Ok(()) => {
                    issue_type.set(IssueType::default());
                    description.set(String::new());
                    on_posted.call(());
                    alert("Query submitted successfully!");
                }
                Err(err) => alert(&err.user_message("Failed to submit query")),
            }
            submitting.set(false);
        });
    };

    rsx! {
        form { class: "card bg-base-200 mb-6", onsubmit: submit,
            div { class: "card-body gap-3",
                h3 { class: "card-title", "Raise a query" }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| issue_type.set(IssueType::from_value(&evt.value())),
                    for kind in IssueType::ALL {
                        option { value: kind.as_str(), selected: issue_type() == kind, "{kind.label()}" }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "Describe your issue...",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                div { class: "card-actions justify-end",
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "Submit Query" }
                }
            }
        }
        if queries.is_empty() {
            p { class: "opacity-70", "No queries raised yet." }
        }
        for query in queries.iter() {
            div { key: "{query.id}", class: "card bg-base-100 shadow-sm mb-3",
                div { class: "card-body",
                    div { class: "flex items-center gap-2",
                        span { class: "badge badge-outline", "{query.issue_type.label()}" }
                        span { class: if query.is_open() { "badge badge-warning" } else { "badge badge-success" }, "{query.status}" }
                        span { class: "text-xs opacity-60 ml-auto", "{format::date(query.date_created)}" }
                    }
                    p { "{query.description}" }
                    if let Some(author) = &query.author {
                        p { class: "text-xs opacity-60", "by {author.name}" }
                    }
                    if let Some(reply) = &query.reply {
                        div { class: "alert mt-2", span { strong { "Reply: " } "{reply}" } }
                    }
                }
            }
        }
    }
}

#[component]
fn AnnouncementsChannel(community_id: String, announcements: Vec<Announcement>, on_posted: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(AnnouncementRequest::default);
    let mut posting = use_signal(|| false);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if posting() {
            return;
        }
        let request = form();
        if request.title.trim().is_empty() {
            alert(&ValidationError::Required("Title").to_string());
            return;
        }
        posting.set(true);
        let api = api.clone();
        let community_id = community_id.clone();
        spawn(async move {
            match api.post_announcement(&community_id, &request).await {
                Ok(()) => {
                    form.set(AnnouncementRequest::default());
                    on_posted.call(());
                    alert("Announcement added successfully!");
                }
                Err(err) => alert(&err.user_message("Failed to add announcement")),
            }
            posting.set(false);
        });
    };

    rsx! {
        RoleGate { role: Role::Admin,
            form { class: "card bg-base-200 mb-6", onsubmit: submit,
                div { class: "card-body gap-3",
                    h3 { class: "card-title", "New announcement" }
                    input {
                        class: "input input-bordered",
                        placeholder: "Title",
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Content",
                        value: "{form.read().content}",
                        oninput: move |evt| form.write().content = evt.value(),
                    }
                    label { class: "label cursor-pointer justify-start gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: form.read().pinned,
                            onchange: move |evt| form.write().pinned = evt.checked(),
                        }
                        span { class: "label-text", "Pin to top" }
                    }
                    div { class: "card-actions justify-end",
                        button { r#type: "submit", class: "btn btn-primary", disabled: posting(), "Post Announcement" }
                    }
                }
            }
        }
        if announcements.is_empty() {
            p { class: "opacity-70", "No announcements yet." }
        }
        for announcement in announcements.iter() {
            div { key: "{announcement.id}", class: "card bg-base-100 shadow-sm mb-3",
                div { class: "card-body",
                    div { class: "flex items-center gap-2",
                        if announcement.pinned {
                            span { class: "badge badge-accent", "📌 Pinned" }
                        }
                        h3 { class: "font-semibold", "{announcement.title}" }
                        span { class: "text-xs opacity-60 ml-auto", "{format::date(announcement.created_at)}" }
                    }
                    p { class: "whitespace-pre-line", "{announcement.content}" }
                }
            }
        }
    }
}
