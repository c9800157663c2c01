use dioxus::prelude::*;
use ui::views::PostsView;

use crate::Route;

#[component]
pub fn Posts(topic_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        PostsView {
            topic_id,
            on_open_post: move |post_id: i64| {
                nav.push(Route::PostDetail { topic_id, post_id });
            },
        }
    }
}
