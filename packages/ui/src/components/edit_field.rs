use dioxus::prelude::*;

/// Inline editor for the one record in edit mode.
///
/// `locked` is shown as a disabled input above the editable text; titles
/// stay fixed once a record exists.
#[component]
pub fn EditField(
    #[props(!optional)] locked: Option<String>,
    value: String,
    #[props(default = false)] multiline: bool,
    on_input: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            if let Some(locked) = locked {
                input {
                    class: "w-full px-2 py-1 border border-neutral-200 rounded bg-neutral-100 text-neutral-500",
                    r#type: "text",
                    value: "{locked}",
                    disabled: true,
                }
            }
            if multiline {
                textarea {
                    class: "w-full px-2 py-1 border border-neutral-300 rounded",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            } else {
                input {
                    class: "w-full px-2 py-1 border border-neutral-300 rounded",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-3 py-1 text-sm rounded bg-primary-500 text-white",
                    onclick: move |_| on_save.call(()),
                    "Save"
                }
                button {
                    class: "px-3 py-1 text-sm rounded border border-neutral-300 bg-white",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
