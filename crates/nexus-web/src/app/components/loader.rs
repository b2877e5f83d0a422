use dioxus::prelude::*;

#[component]
pub fn Loader(label: Option<String>) -> Element {
    rsx! {
        div { class: "flex items-center justify-center gap-2 py-12",
            span { class: "loading loading-spinner loading-lg" }
            if let Some(label) = label {
                span { class: "opacity-70", "{label}" }
            }
        }
    }
}

/// Inline error shown in place of content that failed to load.
#[component]
pub fn ErrorNotice(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "alert alert-error my-4",
            span { "{message}" }
            if let Some(on_retry) = on_retry {
                button { class: "btn btn-sm", onclick: move |_| on_retry.call(()), "Retry" }
            }
        }
    }
}
