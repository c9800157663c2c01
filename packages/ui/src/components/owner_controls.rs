use dioxus::prelude::*;

/// Edit and Delete buttons, shown only to the record's owner or the admin.
#[component]
pub fn OwnerControls(
    visible: bool,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex gap-2 mt-2",
            button {
                class: "px-3 py-1 text-sm rounded border border-neutral-300 bg-white hover:bg-neutral-50",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_edit.call(());
                },
                "Edit"
            }
            button {
                class: "px-3 py-1 text-sm rounded border border-red-200 text-red-600 bg-white hover:bg-red-50",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_delete.call(());
                },
                "Delete"
            }
        }
    }
}
