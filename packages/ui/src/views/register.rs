//! Account creation form.

use api::actions;
use api::auth::Registration;
use dioxus::prelude::*;

use crate::components::ErrorBanner;
use crate::session::use_session;

/// Register page. Calls `on_registered` once the account exists; the user
/// logs in separately.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = Registration {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        let confirm = confirm_password();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let backend = session.backend();
            match actions::register(&backend, &registration, &confirm).await {
                Ok(()) => {
                    tracing::info!("Registered {}", registration.username);
                    loading.set(false);
                    on_registered.call(());
                }
                Err(e) => {
                    if !e.is_validation() {
                        tracing::error!("Registration failed: {e}");
                    }
                    loading.set(false);
                    error.set(Some(e.user_message("Registration failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center flex-1 p-8",

            h1 { class: "mb-2 text-neutral-800 font-bold text-[1.75rem]", "Create Account" }
            p { class: "mb-8 text-neutral-600 text-[0.9375rem]", "Join the GigaChat Forum" }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                ErrorBanner { message: error() }

                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "w-full py-1.5 rounded bg-primary-500 text-white font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                a {
                    class: "text-primary-500 no-underline cursor-pointer",
                    onclick: move |_| on_login.call(()),
                    "Login"
                }
            }
        }
    }
}
