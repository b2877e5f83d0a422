use dioxus::prelude::*;
use nexus_types::events::{EventSearch, THEMES};

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, EventCard, Loader},
};

#[component]
pub fn EventsPage() -> Element {
    let api = use_api();
    let mut search_term = use_signal(String::new);
    let mut filter = use_signal(EventSearch::default);

    let mut events = use_load("events", move || {
        let api = api.clone();
        let search = filter();
        async move { api.list_events(&search).await }
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        filter.write().search = search_term();
    };

    rsx! {
        h1 { class: "text-3xl font-bold mb-6", "Discover Events" }

        form { class: "flex flex-wrap gap-2 mb-6", onsubmit: on_search,
            input {
                class: "input input-bordered flex-1 min-w-64",
                placeholder: "Search events...",
                value: "{search_term}",
                oninput: move |evt| search_term.set(evt.value()),
            }
            select {
                class: "select select-bordered",
                onchange: move |evt| filter.write().theme = evt.value(),
                option { value: "", selected: filter.read().theme.is_empty(), "All Themes" }
                for theme in THEMES {
                    option { value: theme, selected: filter.read().theme == theme, "{theme}" }
                }
            }
            button { r#type: "submit", class: "btn btn-primary", "Search" }
        }

        match LoadState::of(&events) {
            LoadState::Loading => rsx! { Loader { label: "Loading events..." } },
            LoadState::Failed(message) => rsx! {
                ErrorNotice { message, on_retry: move |_| events.restart() }
            },
            LoadState::Loaded(list) if list.is_empty() => rsx! {
                p { class: "opacity-70", "No events match your filters." }
            },
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
