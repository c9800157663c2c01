use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{ForumLayout, Home, Login, NotFound, PostDetail, Posts, Register, Topics};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ForumLayout)]
        #[route("/")]
        Home {},
        #[route("/topics")]
        Topics {},
        #[route("/topics/:topic_id/posts")]
        Posts { topic_id: i64 },
        #[route("/topics/:topic_id/posts/:post_id")]
        PostDetail { topic_id: i64, post_id: i64 },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client settings baked into the bundle.
const FORUM_TOML: &str = include_str!("../forum.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::from_toml_or_default(FORUM_TOML);
        tracing::info!("Forum backend at {}", config.api.base_url);
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "GigaChat" }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
