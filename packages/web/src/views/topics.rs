use dioxus::prelude::*;
use ui::views::TopicsView;

use crate::Route;

#[component]
pub fn Topics() -> Element {
    let nav = use_navigator();

    rsx! {
        TopicsView {
            on_open_topic: move |topic_id: i64| {
                nav.push(Route::Posts { topic_id });
            },
        }
    }
}
