//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effects are executed here rather than in the reducer so the transition logic stays synchronous
//! and testable without a browser.

use std::rc::Rc;

use leptos::{
    create_effect, logging, spawn_local, Callable, Callback, SignalGet, SignalGetUntracked,
    SignalSet,
};
use platform_host::{HostServices, PrefsStore};

use crate::{
    persistence,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Builds the runtime host context from an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Reads the persisted wallpaper once and reports the result, success or not.
    pub fn install_wallpaper_hydration(&self, key: String, dispatch: Callback<DesktopAction>) {
        let prefs = self.prefs_store();
        spawn_local(async move {
            let url = persistence::load_wallpaper(prefs.as_ref(), &key).await;
            dispatch.call(DesktopAction::HydrateWallpaper { url });
        });
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistWallpaper => self.persist_wallpaper(runtime),
        }
    }

    fn persist_wallpaper(&self, runtime: DesktopRuntimeContext) {
        // The value written is the one current when the effect runs, not when it was queued.
        let state = runtime.state.get_untracked();
        let config = runtime.config.get_value();
        let prefs = self.prefs_store();
        spawn_local(async move {
            if let Err(err) = persistence::run_persistence_effect(
                prefs.as_ref(),
                &config,
                &state,
                &RuntimeEffect::PersistWallpaper,
            )
            .await
            {
                logging::warn!("persist wallpaper failed: {err}");
            }
        });
    }

    /// Returns the current browser viewport size.
    pub fn viewport_size(&self) -> (i32, i32) {
        platform_host_web::viewport_size()
    }
}

/// Installs the executor that drains reducer-emitted runtime effects in queue order.
pub fn install_effect_executor(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }
        // Effects queued while this batch runs start a fresh queue.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
