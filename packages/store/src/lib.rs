//! Client-side persistence for the forum: the session token and the
//! `forum.toml` client configuration.

pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokenStore;

pub use config::{ApiConfig, ClientConfig, SessionConfig};
pub use token::TokenStore;
