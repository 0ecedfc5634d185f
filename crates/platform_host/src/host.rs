//! Host-bundle models for browser and stub runtime composition.

use std::rc::Rc;

use crate::PrefsStore;

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage` preferences).
    Browser,
    /// Composition with no-op adapters, used for headless runs and previews.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Service bundle injected into the desktop runtime by the entry layer.
///
/// Adapter selection happens before the bundle reaches `desktop_runtime`, which keeps the runtime
/// free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// String preference store (wallpaper URL).
    pub prefs: Rc<dyn PrefsStore>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle around a preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>, host_strategy: HostStrategy) -> Self {
        Self {
            prefs,
            host_strategy,
        }
    }

    /// Bundle backed by [`crate::NoopPrefsStore`].
    pub fn stub() -> Self {
        Self::new(Rc::new(crate::NoopPrefsStore), HostStrategy::Stub)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn stub_bundle_reports_stub_strategy_and_empty_prefs() {
        let host = HostServices::stub();
        assert_eq!(host.host_strategy.as_str(), "stub");
        assert_eq!(block_on(host.prefs.load_pref("wallpaperUrl")).unwrap(), None);
    }
}
