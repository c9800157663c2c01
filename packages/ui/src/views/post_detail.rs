use api::actions;
use api::models::{CommentId, PostId, TopicId};
use api::{Comment, CommentPatch, Enriched, NewComment, Post};
use dioxus::prelude::*;

use crate::components::{EditField, ErrorBanner, OwnerControls};
use crate::list_state::ListState;
use crate::session::use_session;

const LOAD_FAILED: &str = "Failed to fetch post or comments";

/// One post and its comment thread.
#[component]
pub fn PostDetailView(topic_id: TopicId, post_id: PostId) -> Element {
    let session = use_session();

    let mut target = use_signal(|| (topic_id, post_id));
    if *target.peek() != (topic_id, post_id) {
        target.set((topic_id, post_id));
    }

    let mut post = use_signal(|| Option::<Post>::None);
    let mut state = use_signal(ListState::<Comment>::new);
    let mut draft = use_signal(String::new);

    let _loader = use_resource(move || {
        let (topic, post_id) = target();
        async move {
            state.set(ListState::new());
            let backend = session.backend();
            let names = session.usernames();
            match actions::find_post(&backend, topic, post_id).await {
                Ok(found) => post.set(found),
                Err(e) => {
                    state.write().fail(&e, LOAD_FAILED);
                    return;
                }
            }
            let result = actions::load_comments(&backend, &names, topic, post_id).await;
            state.write().settle(result, LOAD_FAILED);
        }
    });

    let handle_create = move |_| {
        let (topic, post_id) = target();
        let input = NewComment { content: draft() };
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let result = actions::create_comment(&backend, &names, topic, post_id, input).await;
            let created = state.write().settle(result, "Failed to create comment");
            if created {
                draft.set(String::new());
            }
        });
    };

    let begin_edit = move |id: CommentId| {
        let text = state
            .read()
            .get(id)
            .map(|e| e.record.content.clone())
            .unwrap_or_default();
        state.write().begin_edit(id, text);
    };

    let save_edit = move |id: CommentId| {
        let Some(content) = state.read().edit_text(id).map(str::to_string) else {
            return;
        };
        let (topic, post_id) = target();
        spawn(async move {
            let backend = session.backend();
            let names = session.usernames();
            let patch = CommentPatch { content };
            let result =
                actions::update_comment(&backend, &names, topic, post_id, id, patch).await;
            state.write().settle(result, "Failed to update comment");
        });
    };

    let delete = move |id: CommentId| {
        let (topic, post_id) = target();
        spawn(async move {
            let backend = session.backend();
            let result = actions::delete_comment(&backend, topic, post_id, id).await;
            state.write().settle(result, "Failed to delete comment");
        });
    };

    let list = state.read();
    let current = post.read();

    rsx! {
        div {
            class: "max-w-3xl mx-auto p-6",
            if let Some(current) = current.as_ref() {
                h2 { class: "mb-2 text-2xl font-semibold text-neutral-800", "{current.title}" }
                p { class: "mb-6 text-neutral-700 whitespace-pre-wrap", "{current.body}" }
            } else if !list.loading {
                h2 { class: "mb-6 text-2xl font-semibold text-neutral-500", "Post not found" }
            }

            div {
                class: "flex flex-col gap-2 mb-6",
                textarea {
                    class: "w-full px-2 py-1.5 border border-neutral-300 rounded",
                    placeholder: "Add a comment...",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    class: "self-start px-4 py-1.5 rounded bg-primary-500 text-white",
                    onclick: handle_create,
                    "Add Comment"
                }
            }

            ErrorBanner { message: list.error.clone() }

            ul {
                class: "flex flex-col gap-3 p-0 list-none",
                for entry in list.items.iter() {
                    CommentItem {
                        key: "{entry.id()}",
                        can_modify: session.can_modify(entry),
                        editing: list.edit_text(entry.id()).map(str::to_string),
                        entry: entry.clone(),
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
fn CommentItem(
    entry: Enriched<Comment>,
    can_modify: bool,
    #[props(!optional)] editing: Option<String>,
    on_begin_edit: EventHandler<CommentId>,
    on_delete: EventHandler<CommentId>,
    on_edit_input: EventHandler<String>,
    on_save: EventHandler<CommentId>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = entry.id();

    rsx! {
        li {
            class: "p-3 rounded border border-neutral-200 bg-white",
            if let Some(text) = editing {
                EditField {
                    locked: None,
                    value: text,
                    multiline: true,
                    on_input: on_edit_input,
                    on_save: move |_| on_save.call(id),
                    on_cancel,
                }
            } else {
                p { class: "m-0 text-neutral-800 whitespace-pre-wrap", "{entry.record.content}" }
                p { class: "mt-1 mb-0 text-sm text-neutral-400", "Created by: {entry.owner_label()}" }
                OwnerControls {
                    visible: can_modify,
                    on_edit: move |_| on_begin_edit.call(id),
                    on_delete: move |_| on_delete.call(id),
                }
            }
        }
    }
}
