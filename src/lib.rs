//! Page behavior logic for the Licitador site.
//!
//! Everything in this crate is plain Rust with no DOM types, so the rules can
//! be unit-tested on the host. The wasm binding layer lives in
//! `crates/licitador_web` and applies the decisions made here to the page.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod header;
pub mod images;
pub mod markup;
pub mod menu;
pub mod reveal;
pub mod sections;
pub mod throttle;
pub mod time;
pub mod toast;

pub use config::SiteConfig;
pub use error::SiteError;
