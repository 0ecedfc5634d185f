//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use desktop_app_contract::{ContentModule, LaunchCatalog, WallpaperBinding};
use leptos::*;
use platform_host::HostServices;

use crate::{
    host::{install_effect_executor, DesktopHostContext},
    model::{DesktopConfig, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Layout and persistence policy.
    pub config: StoredValue<DesktopConfig>,
    /// Launchables shown as desktop icons and start-menu entries.
    pub catalog: StoredValue<LaunchCatalog>,
    /// Renderer for window contents.
    pub content: StoredValue<ContentModule>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens or focuses the launchable with `id`. Unknown ids are ignored.
    pub fn activate_launchable(&self, id: &str) {
        let Some(descriptor) = self.catalog.with_value(|catalog| catalog.resolve(id).cloned())
        else {
            return;
        };
        self.dispatch_action(DesktopAction::Activate { descriptor });
    }

    /// Opens or focuses a launchable from the start menu, closing the menu in the same dispatch.
    pub fn launch_from_start_menu(&self, id: &str) {
        let Some(descriptor) = self.catalog.with_value(|catalog| catalog.resolve(id).cloned())
        else {
            return;
        };
        self.dispatch_action(DesktopAction::LaunchFromStartMenu { descriptor });
    }

    /// Wallpaper value-and-setter pair handed to content panels.
    pub fn wallpaper_binding(&self) -> WallpaperBinding {
        let state = self.state;
        let dispatch = self.dispatch;
        WallpaperBinding::new(
            Signal::derive(move || state.with(|desktop| desktop.wallpaper.url.clone())),
            Callback::new(move |url| dispatch.call(DesktopAction::SetWallpaper { url })),
        )
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let host = runtime.host.get_value();
    logging::log!("desktop runtime starting on `{}` host", host.host_strategy_name());

    let (width, height) = host.viewport_size();
    runtime.dispatch_action(DesktopAction::ViewportResized { width, height });

    host.install_wallpaper_hydration(
        runtime.config.get_value().wallpaper_pref_key,
        runtime.dispatch,
    );
    install_effect_executor(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and loads persisted state.
pub fn DesktopProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Launchables supplied by the hosting application.
    catalog: LaunchCatalog,
    /// Renderer for window contents.
    content: ContentModule,
    /// Policy overrides; defaults apply when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let config = store_value(config.unwrap_or_default());
    let catalog = store_value(catalog);
    let content = store_value(content);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let result = config.with_value(|config| reduce_desktop(&mut desktop, &mut ui, config, action));
        match result {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer rejected action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        catalog,
        content,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
