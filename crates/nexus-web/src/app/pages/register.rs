use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use nexus_types::auth::{RegisterRequest, Role};

use crate::{
    app::{api::use_api, auth::use_session},
    Routes,
};

/// Time the success screen stays up before the role-based redirect.
const SUCCESS_DELAY: Duration = Duration::from_secs(2);

/// Roles offered by the sign-up form.
const ROLE_OPTIONS: [(Role, &str); 2] = [(Role::User, "User"), (Role::Admin, "Admin")];

#[component]
pub fn RegisterPage() -> Element {
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator();

    let mut form = use_signal(RegisterRequest::default);
    let mut submitting = use_signal(|| false);
    let mut registered = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if session.is_authenticated() && !registered() {
            navigator.replace(Routes::LandingPage {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error_message.set(None);

        let request = form();
        if let Err(err) = request.validate() {
            error_message.set(Some(err.to_string()));
            return;
        }

        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.register(&request).await {
                Ok(response) => {
                    let landing = response.role().map_or("/", |role| role.landing_after_register());
                    tracing::info!(email = %request.email, role = %response.role, "registered");
                    registered.set(true);
                    session.sign_in(response);
                    sleep(SUCCESS_DELAY).await;
                    navigator.push(landing);
                }
                Err(err) => {
                    error_message.set(Some(err.user_message("Registration failed")));
                    submitting.set(false);
                }
            }
        });
    };

    if registered() {
        return rsx! {
            div { class: "hero min-h-[50vh]",
                div { class: "hero-content text-center flex-col",
                    h2 { class: "text-3xl font-bold", "Registration Successful!" }
                    p { "Welcome to Nexus. Redirecting..." }
                    span { class: "loading loading-dots loading-lg" }
                }
            }
        };
    }

    let is_admin = form.read().role.is_admin();

    rsx! {
        div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
            div { class: "card w-full max-w-md bg-base-100 shadow-xl",
                div { class: "card-body",
                    h2 { class: "card-title justify-center mb-4", "Create your Nexus account" }

                    if let Some(error) = error_message() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }

                    form { onsubmit: on_submit, class: "flex flex-col gap-3",
                        input {
                            placeholder: "Full Name",
                            class: "input input-bordered w-full",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                            required: true,
                        }
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            class: "input input-bordered w-full",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                            required: true,
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            class: "input input-bordered w-full",
                            value: "{form.read().password}",
                            oninput: move |evt| form.write().password = evt.value(),
                            autocomplete: "new-password",
                            required: true,
                        }
                        input {
                            r#type: "password",
                            placeholder: "Confirm Password",
                            class: "input input-bordered w-full",
                            value: "{form.read().confirm_password}",
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                            autocomplete: "new-password",
                            required: true,
                        }
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| {
                                if let Ok(role) = evt.value().parse::<Role>() {
                                    form.write().role = role;
                                }
                            },
                            for (role, label) in ROLE_OPTIONS {
                                option { value: role.as_str(), selected: form.read().role == role, "{label}" }
                            }
                        }
                        if is_admin {
                            input {
                                placeholder: "College Name",
                                class: "input input-bordered w-full",
                                value: "{form.read().college_name}",
                                oninput: move |evt| form.write().college_name = evt.value(),
                                required: true,
                            }
                            input {
                                r#type: "password",
                                placeholder: "Admin Secret Code",
                                class: "input input-bordered w-full",
                                value: "{form.read().admin_secret}",
                                oninput: move |evt| form.write().admin_secret = evt.value(),
                                required: true,
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-full",
                            disabled: submitting(),
                            if submitting() { "Creating account..." } else { "Register" }
                        }
                    }

                    p { class: "text-center text-sm mt-4",
                        "Already have an account? "
                        Link { class: "link link-primary", to: Routes::LoginPage {}, "Login" }
                    }
                }
            }
        }
    }
}
