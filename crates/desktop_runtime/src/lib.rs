//! Retro desktop window manager runtime: window registry, boot gate, viewport policy, wallpaper
//! persistence, and the Leptos shell that renders them.

pub mod boot;
pub mod components;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod viewport;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_wallpaper, persist_wallpaper, run_persistence_effect};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
