use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

/// Registration does not sign in, so success leads to the login page.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
