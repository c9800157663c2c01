use api::actions;
use api::auth::Credentials;
use dioxus::prelude::*;

use crate::components::ErrorBanner;
use crate::session::use_session;

/// Username/password form. Stores the issued token and calls `on_success`.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials {
            username: username().trim().to_string(),
            password: password(),
        };
        spawn(async move {
            error.set(None);
            loading.set(true);
            let backend = session.backend();
            match actions::log_in(&backend, &credentials).await {
                Ok(token) => {
                    session.sign_in(&token);
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    if !e.is_validation() {
                        tracing::error!("Login failed: {e}");
                    }
                    loading.set(false);
                    error.set(Some(e.user_message("Invalid username or password")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center flex-1 p-8",
            h1 { class: "mb-8 text-neutral-800 font-bold text-[1.75rem]", "Login" }

            form {
                onsubmit: handle_login,
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
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "w-full py-1.5 rounded bg-primary-500 text-white font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                a {
                    class: "text-primary-500 no-underline cursor-pointer",
                    onclick: move |_| on_register.call(()),
                    "Register"
                }
            }
        }
    }
}
