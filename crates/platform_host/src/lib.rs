//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! Concrete browser adapters live in `platform_host_web`; this crate only defines the service
//! traits, in-process implementations for tests and stub hosts, and the host bundle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod storage;

pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_non_empty_pref_with, put_or_clear_pref_with, MemoryPrefsStore, NoopPrefsStore,
    PrefsStore, PrefsStoreFuture,
};
