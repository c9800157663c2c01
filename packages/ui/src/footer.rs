use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "px-6 py-4 text-center text-sm text-neutral-500 border-t border-neutral-200",
            p { class: "m-0", "© 2024 GigaChat. All rights reserved." }
        }
    }
}
