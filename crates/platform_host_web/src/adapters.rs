use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, NoopPrefsStore, PrefsStore, PrefsStoreFuture};

use crate::WebPrefsStore;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// No-op preferences for stub builds.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, value),
            Self::Stub(store) => store.save_pref(key, value),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Stub(store) => store.delete_pref(key),
        }
    }
}

/// Returns the preference store for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Assembles the host bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(prefs_store()), selected_host_strategy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_bundle_matches_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(
            services.host_strategy.as_str(),
            if cfg!(feature = "desktop-host-stub") { "stub" } else { "browser" }
        );
    }
}
