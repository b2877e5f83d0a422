use dioxus::prelude::*;
use nexus_types::community::{Category, CreateCommunityRequest};

use crate::{
    app::{api::use_api, notify::alert},
    Routes,
};

#[component]
pub fn CreateCommunityPage() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-2xl mx-auto",
            div { class: "card-body",
                h1 { class: "card-title text-2xl", "Create Community" }
                CommunityForm {
                    on_created: move |_| {
                        nav.push(Routes::CommunitiesPage {});
                    },
                    on_cancel: move |_| {
                        nav.push(Routes::CommunitiesPage {});
                    },
                }
            }
        }
    }
}

/// Form posting a new community. Also embedded in the admin dashboard.
#[component]
pub fn CommunityForm(on_created: EventHandler<()>, on_cancel: Option<EventHandler<()>>) -> Element {
    let api = use_api();
    let mut form = use_signal(CreateCommunityRequest::default);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let request = form();
        if let Err(err) = request.validate() {
            alert(&err.to_string());
            return;
        }
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            match api.create_community(&request).await {
                Ok(()) => {
                    tracing::info!(name = %request.name, "community created");
                    alert("Community created successfully!");
                    form.set(CreateCommunityRequest::default());
                    on_created.call(());
                }
                Err(err) => alert(&err.user_message("Failed to create community")),
            }
            saving.set(false);
        });
    };

    rsx! {
        form { class: "flex flex-col gap-3", onsubmit: on_submit,
            input {
                class: "input input-bordered",
                placeholder: "Community Name",
                value: "{form.read().name}",
                oninput: move |evt| form.write().name = evt.value(),
                required: true,
            }
            input {
                class: "input input-bordered",
                placeholder: "College Name",
                value: "{form.read().college_name}",
                oninput: move |evt| form.write().college_name = evt.value(),
                required: true,
            }
            textarea {
                class: "textarea textarea-bordered",
                placeholder: "Description",
                rows: "4",
                value: "{form.read().description}",
                oninput: move |evt| form.write().description = evt.value(),
            }
            select {
                class: "select select-bordered",
                onchange: move |evt| form.write().category = Category::from_value(&evt.value()),
                for category in Category::ALL {
                    option { value: category.as_str(), selected: form.read().category == category, "{category.label()}" }
                }
            }
            div { class: "flex justify-end gap-2",
                if let Some(on_cancel) = on_cancel {
                    button { r#type: "button", class: "btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
                button { r#type: "submit", class: "btn btn-primary", disabled: saving(),
                    if saving() { "Creating..." } else { "Create Community" }
                }
            }
        }
    }
}
