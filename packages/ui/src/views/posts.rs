use api::actions::{self, UNKNOWN_TOPIC};
use api::models::{PostId, TopicId};
use api::{Enriched, NewPost, Post, PostPatch};
use dioxus::prelude::*;

use crate::components::{EditField, ErrorBanner, OwnerControls};
use crate::list_state::ListState;
use crate::session::use_session;

/// Posts of one topic, with the topic's title as heading.
#[component]
pub fn PostsView(topic_id: TopicId, on_open_post: EventHandler<PostId>) -> Element {
    let session = use_session();

    // Follow route param changes
    let mut topic = use_signal(|| topic_id);
    if *topic.peek() != topic_id {
        topic.set(topic_id);
    }

    let mut state = use_signal(ListState::<Post>::new);
    let mut topic_title = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);

    let _loader = use_resource(move || {
        let topic = topic();
        async move {
            state.set(ListState::new());
            let backend = session.backend();
            let names = session.usernames();
            let result = actions::load_posts(&backend, &names, topic).await;
            if !state.write().settle(result, "Failed to fetch posts") {
                return;
            }
            match actions::topic_title(&backend, topic).await {
                Ok(name) => topic_title.set(name),
                Err(e) => {
                    tracing::warn!("Failed to resolve topic {topic}: {e}");
                    topic_title.set(UNKNOWN_TOPIC.to_string());
                }
            }
        }
    });

    let handle_create = move |_| {
        let input = NewPost {
            title: title(),
            body: body(),
        };
        let topic = topic();
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let result = actions::create_post(&backend, &names, topic, input).await;
            let created = state.write().settle(result, "Failed to create post");
            if created {
                title.set(String::new());
                body.set(String::new());
            }
        });
    };

    let begin_edit = move |id: PostId| {
        let text = state
            .read()
            .get(id)
            .map(|e| e.record.body.clone())
            .unwrap_or_default();
        state.write().begin_edit(id, text);
    };

    let save_edit = move |id: PostId| {
        let Some(body) = state.read().edit_text(id).map(str::to_string) else {
            return;
        };
        let topic = topic();
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let result = actions::update_post(&backend, &names, topic, id, PostPatch { body }).await;
            state.write().settle(result, "Failed to update post");
        });
    };

    let delete = move |id: PostId| {
        let topic = topic();
        spawn(async move {
            let backend = session.backend();
            let result = actions::delete_post(&backend, topic, id).await;
            state.write().settle(result, "Failed to delete post");
        });
    };

    let list = state.read();

    rsx! {
        div {
            class: "max-w-3xl mx-auto p-6",
            h2 { class: "mb-4 text-2xl font-semibold text-neutral-800", "Posts for Topic: {topic_title}" }

            div {
                class: "flex flex-col gap-2 mb-6",
                input {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    r#type: "text",
                    placeholder: "Post Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                textarea {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    placeholder: "Post Body",
                    value: body(),
                    oninput: move |evt: FormEvent| body.set(evt.value()),
                }
                button {
                    class: "self-start px-4 py-1.5 rounded bg-primary-500 text-white",
                    onclick: handle_create,
                    "Create Post"
                }
            }

            ErrorBanner { message: list.error.clone() }

            if list.loading {
                p { class: "text-neutral-500", "Loading posts..." }
            }

            ul {
                class: "flex flex-col gap-3 p-0 list-none",
                for entry in list.items.iter() {
                    PostItem {
                        key: "{entry.id()}",
                        can_modify: session.can_modify(entry),
                        editing: list.edit_text(entry.id()).map(str::to_string),
                        entry: entry.clone(),
                        on_open: on_open_post,
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
fn PostItem(
    entry: Enriched<Post>,
    can_modify: bool,
    #[props(!optional)] editing: Option<String>,
    on_open: EventHandler<PostId>,
    on_begin_edit: EventHandler<PostId>,
    on_delete: EventHandler<PostId>,
    on_edit_input: EventHandler<String>,
    on_save: EventHandler<PostId>,
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
                p { class: "m-0 text-neutral-700 whitespace-pre-wrap", "{entry.record.body}" }
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
