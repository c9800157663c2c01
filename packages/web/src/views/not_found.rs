use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No page at /{path}");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center flex-1 p-8 text-neutral-600",
            h2 { class: "mb-2 text-2xl font-semibold", "Page not found" }
            p { class: "mb-4", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the forum" }
        }
    }
}
