use dioxus::prelude::*;

/// Landing page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        main {
            class: "flex flex-1 items-center justify-center p-8 bg-gradient-to-br from-sky-50 to-white",
            div {
                class: "flex flex-col items-center p-12 bg-white rounded-xl shadow-lg w-full max-w-xl",
                h2 { class: "mb-4 text-4xl font-bold text-primary-500 text-center", "Welcome to the GigaChat Forum" }
                p { class: "m-0 text-xl text-neutral-600 text-center", "Here chats only Giga Chads!" }
            }
        }
    }
}
