//! Wallpaper preference persistence.
//!
//! The wallpaper URL is the only state that survives a reload. Reads and writes are best-effort:
//! failures are logged and otherwise swallowed so boot never stalls on storage.

use leptos::logging;
use platform_host::{load_non_empty_pref_with, put_or_clear_pref_with, PrefsStore};

use crate::{
    model::{DesktopConfig, DesktopState},
    reducer::RuntimeEffect,
};

/// Loads the saved wallpaper URL. Missing, empty, and unreadable values all yield `None`.
pub async fn load_wallpaper(prefs: &dyn PrefsStore, key: &str) -> Option<String> {
    match load_non_empty_pref_with(prefs, key).await {
        Ok(url) => url,
        Err(err) => {
            logging::warn!("wallpaper preference load failed: {err}");
            None
        }
    }
}

/// Saves the wallpaper URL, clearing the stored key for the default background.
///
/// # Errors
///
/// Returns the preference store error when the write fails.
pub async fn persist_wallpaper(
    prefs: &dyn PrefsStore,
    key: &str,
    url: Option<&str>,
) -> Result<(), String> {
    put_or_clear_pref_with(prefs, key, url).await
}

/// Executes a persistence effect against the state snapshot current at execution time.
///
/// # Errors
///
/// Returns the preference store error when the write fails.
pub async fn run_persistence_effect(
    prefs: &dyn PrefsStore,
    config: &DesktopConfig,
    state: &DesktopState,
    effect: &RuntimeEffect,
) -> Result<(), String> {
    match effect {
        RuntimeEffect::PersistWallpaper => {
            persist_wallpaper(
                prefs,
                &config.wallpaper_pref_key,
                state.wallpaper.url.as_deref(),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};

    use super::*;
    use crate::{
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    struct UnreadablePrefsStore;

    impl PrefsStore for UnreadablePrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("SecurityError: storage disabled".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _value: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("QuotaExceededError".to_string()) })
        }

        fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("SecurityError: storage disabled".to_string()) })
        }
    }

    #[test]
    fn wallpaper_survives_reload() {
        let key = DesktopConfig::default().wallpaper_pref_key;
        let store = MemoryPrefsStore::default();

        block_on(persist_wallpaper(&store, &key, Some("/wallpapers/teal.png"))).expect("save");
        let reloaded = store.clone();

        assert_eq!(
            block_on(load_wallpaper(&reloaded, &key)).as_deref(),
            Some("/wallpapers/teal.png")
        );
    }

    #[test]
    fn clearing_wallpaper_removes_the_key() {
        let store = MemoryPrefsStore::with_entries([("wallpaperUrl", "/old.png")]);

        block_on(persist_wallpaper(&store, "wallpaperUrl", None)).expect("clear");

        assert_eq!(store.peek("wallpaperUrl"), None);
        assert_eq!(block_on(load_wallpaper(&store, "wallpaperUrl")), None);
    }

    #[test]
    fn unreadable_storage_falls_back_to_default() {
        assert_eq!(
            block_on(load_wallpaper(&UnreadablePrefsStore, "wallpaperUrl")),
            None
        );
    }

    #[test]
    fn write_failures_are_reported_to_the_caller() {
        let result = block_on(persist_wallpaper(
            &UnreadablePrefsStore,
            "wallpaperUrl",
            Some("/x.png"),
        ));
        assert!(result.is_err());
    }

    fn booted() -> (DesktopState, InteractionState, DesktopConfig) {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        reduce_desktop(&mut state, &mut ui, &config, DesktopAction::SplashComplete).expect("boot");
        (state, ui, config)
    }

    fn set_and_flush(
        store: &MemoryPrefsStore,
        state: &mut DesktopState,
        ui: &mut InteractionState,
        config: &DesktopConfig,
        url: Option<&str>,
    ) {
        let effects = reduce_desktop(
            state,
            ui,
            config,
            DesktopAction::SetWallpaper {
                url: url.map(str::to_string),
            },
        )
        .expect("set wallpaper");
        for effect in &effects {
            block_on(run_persistence_effect(store, config, state, effect)).expect("persist");
        }
    }

    #[test]
    fn picker_choice_reaches_storage_and_reloads() {
        let store = MemoryPrefsStore::default();
        let (mut state, mut ui, config) = booted();

        set_and_flush(&store, &mut state, &mut ui, &config, Some("/wallpapers/hills.jpg"));

        assert_eq!(store.peek("wallpaperUrl").as_deref(), Some("/wallpapers/hills.jpg"));
        let reloaded = store.clone();
        assert_eq!(
            block_on(load_wallpaper(&reloaded, &config.wallpaper_pref_key)).as_deref(),
            Some("/wallpapers/hills.jpg")
        );
    }

    #[test]
    fn resetting_from_the_picker_deletes_the_stored_value() {
        let store = MemoryPrefsStore::default();
        let (mut state, mut ui, config) = booted();
        set_and_flush(&store, &mut state, &mut ui, &config, Some("/a.png"));

        set_and_flush(&store, &mut state, &mut ui, &config, None);

        assert_eq!(store.peek("wallpaperUrl"), None);
        assert_eq!(block_on(load_wallpaper(&store, &config.wallpaper_pref_key)), None);
    }

    #[test]
    fn effect_writes_the_value_current_at_execution() {
        let store = MemoryPrefsStore::default();
        let (mut state, mut ui, config) = booted();
        let first = reduce_desktop(
            &mut state,
            &mut ui,
            &config,
            DesktopAction::SetWallpaper {
                url: Some("/first.png".to_string()),
            },
        )
        .expect("first");
        reduce_desktop(
            &mut state,
            &mut ui,
            &config,
            DesktopAction::SetWallpaper {
                url: Some("/second.png".to_string()),
            },
        )
        .expect("second");

        block_on(run_persistence_effect(&store, &config, &state, &first[0])).expect("persist");

        assert_eq!(store.peek("wallpaperUrl").as_deref(), Some("/second.png"));
    }
}
