//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::LaunchableDescriptor;
use thiserror::Error;

use crate::{
    boot,
    model::{
        DesktopConfig, DesktopState, DragSession, InteractionState, PointerPosition, WindowId,
    },
    viewport,
    window_manager::{
        activate_window, close_window, focus_window, minimize_window, move_window, restore_window,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// The splash animation finished.
    SplashComplete,
    /// The user acknowledged the mobile warning.
    DismissMobileWarning,
    /// The browser viewport changed size (also sent once at startup).
    ViewportResized {
        /// Viewport width in CSS pixels.
        width: i32,
        /// Viewport height in CSS pixels.
        height: i32,
    },
    /// Open or focus the window for a launchable (desktop icon double-activation, direct open).
    Activate {
        /// Launchable to open.
        descriptor: LaunchableDescriptor,
    },
    /// Open or focus a launchable from the start menu and close the menu.
    LaunchFromStartMenu {
        /// Launchable to open.
        descriptor: LaunchableDescriptor,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window and focus it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Focus a window after direct interaction with its chrome.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Select a desktop icon.
    SelectIcon {
        /// Launchable id of the icon.
        icon_id: String,
    },
    /// Background click: clear icon selection and close the start menu together.
    DismissOverlays,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Result of the boot-time wallpaper preference read.
    HydrateWallpaper {
        /// Stored wallpaper URL, `None` when absent or unreadable.
        url: Option<String>,
    },
    /// Replace the wallpaper.
    SetWallpaper {
        /// New wallpaper URL, `None` for the default background.
        url: Option<String>,
    },
}

impl DesktopAction {
    /// Stable action name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SplashComplete => "splash-complete",
            Self::DismissMobileWarning => "dismiss-mobile-warning",
            Self::ViewportResized { .. } => "viewport-resized",
            Self::Activate { .. } => "activate",
            Self::LaunchFromStartMenu { .. } => "launch-from-start-menu",
            Self::CloseWindow { .. } => "close-window",
            Self::MinimizeWindow { .. } => "minimize-window",
            Self::RestoreWindow { .. } => "restore-window",
            Self::FocusWindow { .. } => "focus-window",
            Self::BeginMove { .. } => "begin-move",
            Self::UpdateMove { .. } => "update-move",
            Self::EndMove => "end-move",
            Self::SelectIcon { .. } => "select-icon",
            Self::DismissOverlays => "dismiss-overlays",
            Self::ToggleStartMenu => "toggle-start-menu",
            Self::CloseStartMenu => "close-start-menu",
            Self::HydrateWallpaper { .. } => "hydrate-wallpaper",
            Self::SetWallpaper { .. } => "set-wallpaper",
        }
    }

    /// Whether the action is only reachable once the desktop is showing.
    const fn requires_interactive_shell(&self) -> bool {
        !matches!(
            self,
            Self::SplashComplete
                | Self::DismissMobileWarning
                | Self::ViewportResized { .. }
                | Self::HydrateWallpaper { .. }
                | Self::SetWallpaper { .. }
                | Self::EndMove
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Write the current wallpaper preference.
    PersistWallpaper,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer rejections. Unknown window ids are not errors; they are no-ops.
pub enum ReducerError {
    /// The action has no entry point while the splash or mobile warning is showing.
    #[error("desktop is not interactive yet; `{action}` ignored")]
    ShellNotInteractive {
        /// Name of the rejected action.
        action: &'static str,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Each call fully applies its transition before returning, so the next render always observes a
/// consistent snapshot.
///
/// # Errors
///
/// Returns [`ReducerError::ShellNotInteractive`] for icon, menu, and window actions dispatched
/// before boot finishes or while the mobile warning covers the desktop.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    if action.requires_interactive_shell() && !state.is_interactive() {
        return Err(ReducerError::ShellNotInteractive {
            action: action.name(),
        });
    }

    let mut effects = Vec::new();
    match action {
        DesktopAction::SplashComplete => {
            boot::complete_splash(state);
        }
        DesktopAction::DismissMobileWarning => {
            boot::dismiss_mobile_warning(state);
        }
        DesktopAction::ViewportResized { width, height } => {
            if viewport::observe_viewport(state, width, height, config) {
                interaction.dragging = None;
            }
        }
        DesktopAction::Activate { descriptor } => {
            activate_window(&mut state.registry, &descriptor, config);
        }
        DesktopAction::LaunchFromStartMenu { descriptor } => {
            activate_window(&mut state.registry, &descriptor, config);
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(&mut state.registry, &window_id);
            clear_drag_for(interaction, &window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            minimize_window(&mut state.registry, &window_id);
            clear_drag_for(interaction, &window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore_window(&mut state.registry, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(&mut state.registry, &window_id);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if state.is_mobile() {
                return Ok(effects);
            }
            let Some(position_start) = state.registry.get(&window_id).map(|w| w.position) else {
                return Ok(effects);
            };
            focus_window(&mut state.registry, &window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                move_window(
                    &mut state.registry,
                    &session.window_id,
                    session.position_start.offset(dx, dy),
                );
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SelectIcon { icon_id } => {
            state.selected_icon = Some(icon_id);
        }
        DesktopAction::DismissOverlays => {
            state.selected_icon = None;
            state.start_menu_open = false;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::HydrateWallpaper { url } => {
            state.wallpaper.url = url.filter(|u| !u.is_empty());
            state.wallpaper.loaded = true;
        }
        DesktopAction::SetWallpaper { url } => {
            let url = url.filter(|u| !u.is_empty());
            if state.wallpaper.url != url {
                state.wallpaper.url = url;
                effects.push(RuntimeEffect::PersistWallpaper);
            }
            state.wallpaper.loaded = true;
        }
    }

    Ok(effects)
}

fn clear_drag_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.window_id == window_id)
    {
        interaction.dragging = None;
    }
}
