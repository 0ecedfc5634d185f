//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Preferences are backed by `window.localStorage`; viewport measurement reads the browser
//! window. Non-wasm builds compile to inert fallbacks so the workspace tests run natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;
pub mod viewport;

pub use adapters::{build_host_services, prefs_store, selected_host_strategy, PrefsStoreAdapter};
pub use storage::local_prefs::WebPrefsStore;
pub use viewport::viewport_size;
