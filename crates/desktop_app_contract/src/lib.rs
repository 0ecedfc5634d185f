//! Shared contract types between the desktop window manager runtime and content panels.
//!
//! The window manager only needs a launchable's identity and display metadata. What a window
//! actually shows is addressed through an opaque [`ContentRef`] that the runtime hands back to the
//! host-supplied [`ContentModule`] when a window body mounts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, SignalGet, View};
use serde::{Deserialize, Serialize};

/// Opaque handle naming the content collaborator a window should mount.
///
/// The runtime never interprets the token; only the [`ContentModule`] that produced the catalog
/// knows what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(String);

impl ContentRef {
    /// Creates a content handle from a host-defined token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable display metadata for one launchable content panel.
pub struct LaunchableDescriptor {
    /// Unique launchable id; also the id of the window it spawns.
    pub id: String,
    /// Window and icon label.
    pub title: String,
    /// Icon glyph shown on the desktop, start menu, titlebar and taskbar.
    pub icon_glyph: String,
    /// Content collaborator handle.
    pub content: ContentRef,
}

impl LaunchableDescriptor {
    /// Builds a descriptor from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon_glyph: impl Into<String>,
        content: ContentRef,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon_glyph: icon_glyph.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Read-only lookup of launchables supplied wholesale by the hosting application.
///
/// Entry order is display order for desktop icons and the start menu. Ids are unique; a later
/// entry reusing an id is dropped at construction.
pub struct LaunchCatalog {
    entries: Vec<LaunchableDescriptor>,
}

impl LaunchCatalog {
    /// Builds a catalog, keeping the first entry for any repeated id.
    pub fn new(entries: impl IntoIterator<Item = LaunchableDescriptor>) -> Self {
        let mut unique: Vec<LaunchableDescriptor> = Vec::new();
        for entry in entries {
            if unique.iter().all(|existing| existing.id != entry.id) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Resolves a launchable id to its descriptor.
    pub fn resolve(&self, id: &str) -> Option<&LaunchableDescriptor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the entries in display order.
    pub fn entries(&self) -> &[LaunchableDescriptor] {
        &self.entries
    }
}

/// Mount context handed to a content module for one window body.
#[derive(Clone)]
pub struct ContentMountContext {
    /// Window id the content is mounted into.
    pub window_id: String,
    /// Content handle from the window's descriptor.
    pub content: ContentRef,
    /// Shared wallpaper value-and-setter pair.
    pub wallpaper: WallpaperBinding,
}

/// Mount function supplied by the host for rendering window content.
pub type ContentMountFn = Rc<dyn Fn(ContentMountContext) -> View>;

#[derive(Clone)]
/// Host-supplied renderer resolving [`ContentRef`] handles into views.
pub struct ContentModule {
    mount_fn: ContentMountFn,
}

impl ContentModule {
    /// Wraps a mount function.
    pub fn new(mount_fn: impl Fn(ContentMountContext) -> View + 'static) -> Self {
        Self {
            mount_fn: Rc::new(mount_fn),
        }
    }

    /// Mounts the content for one window.
    pub fn mount(&self, context: ContentMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[derive(Clone, Copy)]
/// Current wallpaper URL plus its setter, shared between the desktop and the background picker.
pub struct WallpaperBinding {
    /// Current wallpaper URL, `None` for the patterned default background.
    pub current: Signal<Option<String>>,
    setter: Callback<Option<String>>,
}

impl WallpaperBinding {
    /// Creates a binding from a reactive value and its setter.
    pub fn new(current: Signal<Option<String>>, setter: Callback<Option<String>>) -> Self {
        Self { current, setter }
    }

    /// Returns the current wallpaper URL.
    pub fn get(&self) -> Option<String> {
        self.current.get()
    }

    /// Replaces the wallpaper; the desktop runtime persists the change.
    pub fn set(&self, url: Option<String>) {
        self.setter.call(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> LaunchableDescriptor {
        LaunchableDescriptor::new(id, title, "#", ContentRef::new(id))
    }

    #[test]
    fn catalog_resolves_known_ids_and_misses_unknown() {
        let catalog = LaunchCatalog::new([entry("resume", "Resume"), entry("mail", "Mail Me")]);

        assert_eq!(
            catalog.resolve("mail").map(|e| e.title.as_str()),
            Some("Mail Me")
        );
        assert!(catalog.resolve("games").is_none());
        assert_eq!(catalog.entries().len(), 2);
    }

    #[test]
    fn catalog_keeps_first_entry_for_repeated_id() {
        let catalog = LaunchCatalog::new([
            entry("resume", "Resume"),
            entry("resume", "Other"),
            entry("bg", "Change Background"),
        ]);

        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["resume", "bg"]);
        assert_eq!(catalog.resolve("resume").unwrap().title, "Resume");
    }
}
