use dioxus::prelude::*;

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
    },
    components::{ErrorNotice, Loader, QuickEditEvent},
    Routes,
};

/// Full-page entry to the quick edit form.
#[component]
pub fn EditEventPage(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
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
        LoadState::Loaded(loaded) => {
            let back = Routes::EventDetailsPage { id: loaded.id.clone() };
            rsx! {
                QuickEditEvent {
                    event: loaded,
                    on_close: move |_| {
                        nav.push(back.clone());
                    },
                    on_updated: move |_| {},
                }
            }
        }
    }
}
