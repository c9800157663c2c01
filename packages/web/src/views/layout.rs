use dioxus::prelude::*;
use ui::{Destination, Footer, Header};

use crate::Route;

fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::Home => Route::Home {},
        Destination::Topics => Route::Topics {},
        Destination::Login => Route::Login {},
        Destination::Register => Route::Register {},
    }
}

/// Header, the routed page, footer.
#[component]
pub fn ForumLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        Header {
            on_navigate: move |destination: Destination| {
                nav.push(route_for(destination));
            },
        }
        div {
            class: "forum-content",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
