//! Login page: on success go to the topic list.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Topics {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
