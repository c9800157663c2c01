use dioxus::prelude::*;
use ui::views::PostDetailView;

#[component]
pub fn PostDetail(topic_id: i64, post_id: i64) -> Element {
    rsx! {
        PostDetailView { topic_id, post_id }
    }
}
