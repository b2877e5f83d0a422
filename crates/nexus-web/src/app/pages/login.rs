use dioxus::prelude::*;
use nexus_types::auth::LoginRequest;

use crate::{
    app::{api::use_api, auth::use_session},
    Routes,
};

#[component]
pub fn LoginPage() -> Element {
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator();

    let mut form = use_signal(LoginRequest::default);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Redirect away from login if already authenticated
    use_effect(move || {
        if session.is_authenticated() {
            navigator.replace(Routes::LandingPage {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
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
            match api.login(&request).await {
                Ok(response) => {
                    tracing::info!(email = %request.email, role = %response.role, "logged in");
                    session.sign_in(response);
                    navigator.push(Routes::LandingPage {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login failed");
                    error_message.set(Some(err.user_message("Login failed")));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
            div { class: "card w-96 bg-base-100 shadow-xl",
                div { class: "card-body",
                    h2 { class: "card-title justify-center mb-4", "Login to Nexus" }

                    if let Some(error) = error_message() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }

                    form { onsubmit: on_submit, class: "flex flex-col gap-4",
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            class: "input input-bordered w-full",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                            autocomplete: "email",
                            required: true,
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            class: "input input-bordered w-full",
                            value: "{form.read().password}",
                            oninput: move |evt| form.write().password = evt.value(),
                            autocomplete: "current-password",
                            required: true,
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-full",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner" }
                                span { "Logging in" }
                            } else {
                                span { "Login" }
                            }
                        }
                    }

                    p { class: "text-center text-sm mt-4",
                        "Don't have an account? "
                        Link { class: "link link-primary", to: Routes::RegisterPage {}, "Register" }
                    }
                }
            }
        }
    }
}
