use api::actions;
use api::models::TopicId;
use api::{Enriched, NewTopic, Topic, TopicPatch};
use dioxus::prelude::*;

use crate::components::{EditField, ErrorBanner, OwnerControls};
use crate::list_state::ListState;
use crate::session::use_session;

/// All topics, a form to start one, and per-topic edit and delete.
#[component]
pub fn TopicsView(on_open_topic: EventHandler<TopicId>) -> Element {
    let session = use_session();
    let mut state = use_signal(ListState::<Topic>::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let backend = session.backend();
        let names = session.usernames();
        let result = actions::load_topics(&backend, &names).await;
        state.write().settle(result, "Failed to fetch topics");
    });

    let handle_create = move |_| {
        let input = NewTopic {
            title: title(),
            description: description(),
        };
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let result = actions::create_topic(&backend, &names, input).await;
            let created = state.write().settle(result, "Failed to create topic");
            if created {
                title.set(String::new());
                description.set(String::new());
            }
        });
    };

    let begin_edit = move |id: TopicId| {
        let text = state
            .read()
            .get(id)
            .map(|e| e.record.description.clone())
            .unwrap_or_default();
        state.write().begin_edit(id, text);
    };

    let save_edit = move |id: TopicId| {
        let Some(description) = state.read().edit_text(id).map(str::to_string) else {
            return;
        };
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let patch = TopicPatch { description };
            let result = actions::update_topic(&backend, &names, id, patch).await;
            state.write().settle(result, "Failed to update topic");
        });
    };

    let delete = move |id: TopicId| {
        spawn(async move {
            let backend = session.backend();
            let result = actions::delete_topic(&backend, id).await;
            state.write().settle(result, "Failed to delete topic");
        });
    };

    let list = state.read();

    rsx! {
        div {
            class: "max-w-3xl mx-auto p-6",
            h2 { class: "mb-4 text-2xl font-semibold text-neutral-800", "Topics" }

            div {
                class: "flex flex-col gap-2 mb-6",
                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "text",
                    placeholder: "Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                textarea {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    placeholder: "Description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                button {
                    class: "self-start px-4 py-1.5 rounded bg-primary-500 text-white",
                    onclick: handle_create,
                    "Create Topic"
                }
            }

            ErrorBanner { message: list.error.clone() }

            if list.loading {
                p { class: "text-neutral-500", "Loading topics..." }
            }

            ul {
                class: "flex flex-col gap-3 p-0 list-none",
                for entry in list.items.iter() {
                    TopicItem {
                        key: "{entry.id()}",
                        can_modify: session.can_modify(entry),
                        editing: list.edit_text(entry.id()).map(str::to_string),
                        entry: entry.clone(),
                        on_open: on_open_topic,
                        on_begin_edit: begin_edit,
                        on_delete: delete,
                        on_edit_input: move |text: String| state.write().set_edit_text(text),
                        on_save: save_edit,
                        on_cancel: move |_| state.write().cancel_edit(),
                    }
                }
            }
        }
    }
}

#[component]
fn TopicItem(
    entry: Enriched<Topic>,
    can_modify: bool,
    #[props(!optional)] editing: Option<String>,
    on_open: EventHandler<TopicId>,
    on_begin_edit: EventHandler<TopicId>,
    on_delete: EventHandler<TopicId>,
    on_edit_input: EventHandler<String>,
    on_save: EventHandler<TopicId>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = entry.id();

    rsx! {
        li {
            class: "p-4 rounded border border-neutral-200 bg-white",
            if let Some(text) = editing {
                EditField {
                    locked: Some(entry.record.title.clone()),
                    value: text,
                    multiline: true,
                    on_input: on_edit_input,
                    on_save: move |_| on_save.call(id),
                    on_cancel,
                }
            } else {
                h3 {
                    class: "m-0 mb-1 text-lg font-semibold cursor-pointer hover:underline",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_open.call(id);
                    },
                    "{entry.record.title}"
                }
                p { class: "m-0 text-neutral-700", "{entry.record.description}" }
                p { class: "mt-2 mb-0 text-sm text-neutral-400", "Created by: {entry.owner_label()}" }
                OwnerControls {
                    visible: can_modify,
                    on_edit: move |_| on_begin_edit.call(id),
                    on_delete: move |_| on_delete.call(id),
                }
            }
        }
    }
}
