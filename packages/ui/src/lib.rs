//! This crate contains all shared UI for the forum.
//!
//! Pages are platform-agnostic: they take navigation callbacks instead of a
//! concrete route type, and reach the backend through the session context
//! installed by [`SessionProvider`].

pub mod components;

mod session;
pub use session::{
    make_backend, make_token_store, use_session, AppBackend, AppSession, AppTokens,
    SessionContext, SessionProvider,
};

pub mod list_state;
pub use list_state::{EditBuffer, ListState};

mod header;
pub use header::{Destination, Header};

mod footer;
pub use footer::Footer;

pub mod views;
