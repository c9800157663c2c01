use dioxus::prelude::*;

use crate::session::use_session;

/// Where the header links lead. The app maps these onto its routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Topics,
    Login,
    Register,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Topics => "/topics",
            Destination::Login => "/login",
            Destination::Register => "/register",
        }
    }
}

#[component]
fn NavLink(to: Destination, label: &'static str, on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        a {
            class: "text-white no-underline hover:underline",
            href: to.path(),
            onclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                on_navigate.call(to);
            },
            "{label}"
        }
    }
}

fn user_label(name: &str) -> String {
    format!("User: {name}")
}

/// Site header: navigation plus the signed-in user or the auth links.
#[component]
pub fn Header(on_navigate: EventHandler<Destination>) -> Element {
    let session = use_session();
    let label = session.signed_in_name().map(|name| user_label(&name));

    let handle_logout = move |_| {
        session.sign_out();
        on_navigate.call(Destination::Home);
    };

    rsx! {
        header {
            class: "flex items-center justify-between px-6 py-3 bg-neutral-800 text-white",
            h1 { class: "m-0 text-xl font-bold", "GigaChat" }
            nav {
                class: "flex items-center gap-4",
                NavLink { to: Destination::Home, label: "Home", on_navigate }
                NavLink { to: Destination::Topics, label: "Topics", on_navigate }
                if let Some(label) = label {
                    span { class: "text-neutral-300", "{label}" }
                    button {
                        class: "px-3 py-1 text-sm rounded bg-neutral-600 text-white hover:bg-neutral-500",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    NavLink { to: Destination::Login, label: "Login", on_navigate }
                    NavLink { to: Destination::Register, label: "Register", on_navigate }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths_match_routes() {
        assert_eq!(Destination::Home.path(), "/");
        assert_eq!(Destination::Topics.path(), "/topics");
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(Destination::Register.path(), "/register");
    }

    #[test]
    fn test_label_for_malformed_token_has_empty_name() {
        let config = store::ClientConfig::default();
        let session = api::Session::new(crate::make_token_store(&config), config);
        assert_eq!(session.signed_in_name().map(|n| user_label(&n)), None);

        session.sign_in("garbage");
        assert_eq!(
            session.signed_in_name().map(|n| user_label(&n)).as_deref(),
            Some("User: ")
        );

        session.sign_in(&api::identity::unsigned_token(&serde_json::json!({ "sub": "7" })));
        assert_eq!(
            session.signed_in_name().map(|n| user_label(&n)).as_deref(),
            Some("User: User")
        );
    }
}
