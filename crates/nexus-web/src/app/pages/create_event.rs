use dioxus::prelude::*;
use nexus_types::events::{EventDraft, FieldType, MAX_PRIZES, THEMES};

use crate::{
    app::{api::use_api, notify::alert},
    Routes,
};

/// Create an event inside community `id`.
#[component]
pub fn CreateEventPage(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut draft = use_signal(EventDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let community_id = id.clone();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error_message.set(None);

        let request = match draft.read().to_request(&community_id) {
            Ok(request) => request,
            Err(err) => {
                error_message.set(Some(err.to_string()));
                return;
            }
        };

        submitting.set(true);
        let api = api.clone();
        let community_id = community_id.clone();
        spawn(async move {
            match api.create_event(&request).await {
                Ok(()) => {
                    tracing::info!(community = %community_id, name = %request.name, "event created");
                    alert("Event created successfully!");
                    nav.push(Routes::CommunityPage { id: community_id });
                }
                Err(err) => error_message.set(Some(err.user_message("Failed to create event"))),
            }
            submitting.set(false);
        });
    };

    let prizes = draft.read().prizes.as_slice().to_vec();
    let fields = draft.read().registration_fields.clone();
    let prizes_full = draft.read().prizes.is_full();

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-3xl mx-auto",
            form { class: "card-body gap-4", onsubmit: on_submit,
                h1 { class: "card-title text-2xl", "Create Event" }

                if let Some(error) = error_message() {
                    div { class: "alert alert-error", span { "{error}" } }
                }

                h2 { class: "font-semibold text-lg", "Basic Information" }
                input {
                    class: "input input-bordered",
                    placeholder: "Event Name *",
                    value: "{draft.read().name}",
                    oninput: move |evt| draft.write().name = evt.value(),
                    required: true,
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "Description",
                    rows: "4",
                    value: "{draft.read().description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }
                div { class: "grid md:grid-cols-2 gap-3",
                    input {
                        class: "input input-bordered",
                        placeholder: "Location",
                        value: "{draft.read().location}",
                        oninput: move |evt| draft.write().location = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| draft.write().theme = evt.value(),
                        option { value: "", selected: draft.read().theme.is_empty(), "Select Theme" }
                        for theme in THEMES {
                            option { value: theme, selected: draft.read().theme == theme, "{theme}" }
                        }
                    }
                }

                h2 { class: "font-semibold text-lg", "Date & Time" }
                div { class: "grid md:grid-cols-3 gap-3",
                    label { class: "form-control",
                        span { class: "label-text", "Start Date & Time *" }
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered",
                            value: "{draft.read().start_date}",
                            oninput: move |evt| draft.write().start_date = evt.value(),
                            required: true,
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "End Date & Time *" }
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered",
                            value: "{draft.read().end_date}",
                            oninput: move |evt| draft.write().end_date = evt.value(),
                            required: true,
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Registration Deadline *" }
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered",
                            value: "{draft.read().registration_deadline}",
                            oninput: move |evt| draft.write().registration_deadline = evt.value(),
                            required: true,
                        }
                    }
                }

                div { class: "flex flex-wrap gap-6",
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: draft.read().attendance_provided,
                            onchange: move |evt| draft.write().attendance_provided = evt.checked(),
                        }
                        span { class: "label-text", "Attendance provided" }
                    }
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: draft.read().certificates_provided,
                            onchange: move |evt| draft.write().certificates_provided = evt.checked(),
                        }
                        span { class: "label-text", "Certificates provided" }
                    }
                }

                div { class: "flex items-center justify-between",
                    h2 { class: "font-semibold text-lg", "Prizes (max {MAX_PRIZES})" }
                    button {
                        r#type: "button",
                        class: "btn btn-sm",
                        disabled: prizes_full,
                        onclick: move |_| {
                            draft.write().prizes.add();
                        },
                        "+ Add Prize"
                    }
                }
                for (index, prize) in prizes.into_iter().enumerate() {
                    div { key: "{prize.position}", class: "flex items-center gap-2",
                        span { class: "w-24", "Position {prize.position}" }
                        input {
                            r#type: "number",
                            min: "0",
                            class: "input input-bordered flex-1",
                            value: "{prize.amount}",
                            oninput: move |evt| {
                                let amount = evt.value().parse::<f64>().unwrap_or_default();
                                draft.write().prizes.set_amount(index, amount);
                            },
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| draft.write().prizes.remove(index),
                            "✕"
                        }
                    }
                }

                div { class: "flex items-center justify-between",
                    h2 { class: "font-semibold text-lg", "Custom Registration Fields" }
                    button {
                        r#type: "button",
                        class: "btn btn-sm",
                        onclick: move |_| draft.write().add_registration_field(),
                        "+ Add Field"
                    }
                }
                for (index, field) in fields.into_iter().enumerate() {
                    div { key: "{index}", class: "card bg-base-200",
                        div { class: "card-body gap-2 p-4",
                            div { class: "grid md:grid-cols-2 gap-2",
                                input {
                                    class: "input input-bordered input-sm",
                                    placeholder: "Field Name",
                                    value: "{field.field_name}",
                                    oninput: move |evt| draft.write().update_field(index, |f| f.field_name = evt.value()),
                                }
                                select {
                                    class: "select select-bordered select-sm",
                                    onchange: move |evt| {
                                        draft.write().update_field(index, |f| f.field_type = FieldType::from_value(&evt.value()));
                                    },
                                    for kind in FieldType::ALL {
                                        option { value: kind.as_str(), selected: field.field_type == kind, "{kind.as_str()}" }
                                    }
                                }
                                input {
                                    class: "input input-bordered input-sm",
                                    placeholder: "Placeholder",
                                    value: "{field.placeholder}",
                                    oninput: move |evt| draft.write().update_field(index, |f| f.placeholder = evt.value()),
                                }
                                if field.field_type == FieldType::Select {
                                    input {
                                        class: "input input-bordered input-sm",
                                        placeholder: "Options (comma separated)",
                                        value: "{field.options_text()}",
                                        oninput: move |evt| draft.write().update_field(index, |f| f.set_options_text(&evt.value())),
                                    }
                                }
                            }
                            div { class: "flex items-center justify-between",
                                label { class: "label cursor-pointer gap-2",
                                    input {
                                        r#type: "checkbox",
                                        class: "checkbox checkbox-sm",
                                        checked: field.is_required,
                                        onchange: move |evt| draft.write().update_field(index, |f| f.is_required = evt.checked()),
                                    }
                                    span { class: "label-text", "Required" }
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| draft.write().remove_registration_field(index),
                                    "Remove"
                                }
                            }
                        }
                    }
                }

                div { class: "card-actions justify-end",
                    Link { class: "btn", to: Routes::CommunityPage { id: id.clone() }, "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create Event" }
                    }
                }
            }
        }
    }
}
