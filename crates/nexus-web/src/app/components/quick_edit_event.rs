use dioxus::prelude::*;
use nexus_types::events::{self, UpdateEventRequest};

use crate::{
    app::{api::use_api, notify::alert},
    components::Modal,
};

/// Modal form editing the name, location, deadline and description of an
/// event. `on_updated` fires after a successful save, before `on_close`.
#[component]
pub fn QuickEditEvent(event: events::Event, on_close: EventHandler<()>, on_updated: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(|| UpdateEventRequest::from_event(&event));
    let mut saving = use_signal(|| false);
    let event_id = event.id.clone();

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
        let event_id = event_id.clone();
        spawn(async move {
            match api.update_event(&event_id, &request).await {
                Ok(()) => {
                    tracing::info!(event = %event_id, "event updated");
                    alert("Event updated successfully!");
                    on_updated.call(());
                    on_close.call(());
                }
                Err(err) => alert(&err.user_message("Failed to update event")),
            }
            saving.set(false);
        });
    };

    rsx! {
        Modal { open: true, on_close, title: "Quick Edit Event",
            form { class: "flex flex-col gap-3", onsubmit: on_submit,
                label { class: "form-control",
                    span { class: "label-text", "Event Name" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().name}",
                        required: true,
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Location" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().location}",
                        oninput: move |e| form.write().location = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Registration Deadline" }
                    input {
                        class: "input input-bordered",
                        r#type: "datetime-local",
                        value: "{form.read().registration_deadline}",
                        oninput: move |e| form.write().registration_deadline = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Description" }
                    textarea {
                        class: "textarea textarea-bordered",
                        rows: "4",
                        value: "{form.read().description}",
                        oninput: move |e| form.write().description = e.value(),
                    }
                }
                div { class: "flex justify-end gap-2 mt-2",
                    button { r#type: "button", class: "btn", onclick: move |_| on_close.call(()), "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: saving(),
                        if saving() { "Updating..." } else { "Update Event" }
                    }
                }
            }
        }
    }
}
