use chrono::Utc;
use dioxus::prelude::*;
use nexus_types::events::{self, EventRegistration, FieldType, RegistrationField};

use crate::{
    app::{
        api::use_api,
        loading::{use_load, LoadState},
        notify::alert,
    },
    components::{ErrorNotice, Loader},
    Routes,
};

#[component]
pub fn EventRegistrationPage(id: String) -> Element {
    let api = use_api();
    let mut event = use_load(
        "event",
        use_reactive((&id,), move |(id,)| {
            let api = api.clone();
            async move { api.event(&id).await }
        }),
    );

    match LoadState::of(&event) {
        LoadState::Loading => rsx! { Loader {} },
        LoadState::Failed(message) => rsx! {
            ErrorNotice { message, on_retry: move |_| event.restart() }
        },
        LoadState::Loaded(event) => rsx! { RegistrationForm { event } },
    }
}

/// Form built from the event's custom registration fields.
#[component]
fn RegistrationForm(event: events::Event) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut answers = use_signal(EventRegistration::default);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let open = event.registration_open_at(Utc::now());
    let fields = event.registration_fields.clone();
    let event_id = event.id.clone();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let registration = answers();
        if let Err(err) = registration.validate(&fields) {
            error_message.set(Some(err.to_string()));
            return;
        }
        error_message.set(None);
        submitting.set(true);

        let api = api.clone();
        let event_id = event_id.clone();
        spawn(async move {
            match api.register_for_event(&event_id, &registration).await {
                Ok(()) => {
                    tracing::info!(event = %event_id, "registered for event");
                    alert("Registered successfully!");
                    nav.push(Routes::EventDetailsPage { id: event_id });
                }
                Err(err) => error_message.set(Some(err.user_message("Failed to register for event"))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            div { class: "card-body",
                h1 { class: "card-title text-2xl", "Register for {event.name}" }

                if !open {
                    div { class: "alert alert-warning", "Registration for this event has closed." }
                } else {
                    if let Some(error) = error_message() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                    form { class: "flex flex-col gap-3", onsubmit: on_submit,
                        if event.registration_fields.is_empty() {
                            p { class: "opacity-70", "No additional details are needed. Confirm to register." }
                        }
                        for field in event.registration_fields.iter() {
                            label { key: "{field.field_name}", class: "form-control",
                                span { class: "label-text",
                                    "{field.field_name}"
                                    if field.is_required { " *" }
                                }
                                FieldInput {
                                    value: answers.read().get(&field.field_name).to_string(),
                                    on_change: {
                                        let name = field.field_name.clone();
                                        move |value: String| answers.write().set(&name, value)
                                    },
                                    field: field.clone(),
                                }
                            }
                        }
                        button { r#type: "submit", class: "btn btn-primary", disabled: submitting(),
                            if submitting() { "Registering..." } else { "Confirm Registration" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: RegistrationField, value: String, on_change: EventHandler<String>) -> Element {
    let placeholder = field.placeholder.clone();
    match field.field_type {
        FieldType::Select => rsx! {
            select {
                class: "select select-bordered",
                required: field.is_required,
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), disabled: true, "Select..." }
                for opt in field.options.iter() {
                    option { key: "{opt}", value: "{opt}", selected: *opt == value, "{opt}" }
                }
            }
        },
        FieldType::Textarea => rsx! {
            textarea {
                class: "textarea textarea-bordered",
                placeholder,
                required: field.is_required,
                value,
                oninput: move |evt| on_change.call(evt.value()),
            }
        },
        FieldType::Text | FieldType::Email | FieldType::Number => rsx! {
            input {
                class: "input input-bordered",
                r#type: field.field_type.as_str(),
                placeholder,
                required: field.is_required,
                value,
                oninput: move |evt| on_change.call(evt.value()),
            }
        },
    }
}
