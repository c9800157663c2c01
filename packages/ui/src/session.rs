//! Session context for the UI.
//!
//! [`SessionProvider`] builds one [`api::Session`] for the whole app and puts
//! it into the component context; views reach it through [`use_session`].
//! Reading the identity subscribes the calling component, so signing in or
//! out re-renders everything that shows a name or an edit button.

use std::rc::Rc;

use api::{Enriched, HttpForum, Identity, Record, UsernameCache};
use dioxus::prelude::*;
use store::{ClientConfig, TokenStore};

pub type AppTokens = Rc<dyn TokenStore>;
pub type AppSession = api::Session<AppTokens>;
pub type AppBackend = HttpForum<AppTokens>;

/// Platform token store: `localStorage` in the browser, process memory
/// everywhere else.
pub fn make_token_store(config: &ClientConfig) -> AppTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalTokenStore::new(
            config.session.storage_key.clone(),
        ))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!(
            "Using in-memory token store for key {}",
            config.session.storage_key
        );
        Rc::new(store::MemoryTokenStore::new())
    }
}

/// Backend client that authenticates with the session's token.
pub fn make_backend(session: &AppSession) -> AppBackend {
    HttpForum::for_session(session)
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: Signal<AppSession>,
    backend: Signal<AppBackend>,
}

impl SessionContext {
    /// Identity from the stored token. Subscribes the caller.
    pub fn identity(&self) -> Identity {
        self.session.read().identity()
    }

    pub fn display_name(&self) -> Option<String> {
        self.identity().display_name
    }

    /// Whether a token is stored. Subscribes the caller.
    pub fn has_token(&self) -> bool {
        self.session.read().has_token()
    }

    /// Header label name, `None` when signed out. Subscribes the caller.
    pub fn signed_in_name(&self) -> Option<String> {
        self.session.read().signed_in_name()
    }

    /// Whether edit and delete controls are shown for `entry`.
    pub fn can_modify<R: Record>(&self, entry: &Enriched<R>) -> bool {
        self.session.read().can_modify(&entry.record, &entry.owner_name)
    }

    /// The app's one backend client. Clones share the connection pool and
    /// the token store.
    pub fn backend(&self) -> AppBackend {
        self.backend.peek().clone()
    }

    pub fn usernames(&self) -> UsernameCache {
        self.session.peek().usernames().clone()
    }

    pub fn sign_in(&self, token: &str) {
        let mut session = self.session;
        session.write().sign_in(token);
    }

    pub fn sign_out(&self) {
        let mut session = self.session;
        session.write().sign_out();
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Wrap the app with this to make [`use_session`] available.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let session = use_signal(move || {
        let tokens = make_token_store(&config);
        api::Session::new(tokens, config)
    });
    let backend = use_signal(|| make_backend(&session.peek()));
    use_context_provider(|| SessionContext { session, backend });

    rsx! {
        {children}
    }
}
