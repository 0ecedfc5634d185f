//! Window-registry transitions used by the desktop reducer.
//!
//! Every function is total: ids that do not fit the requested transition leave the registry
//! untouched. "Most recently created" always means the highest index in `windows`.

use desktop_app_contract::LaunchableDescriptor;

use crate::model::{
    DesktopConfig, WindowId, WindowPosition, WindowRecord, WindowRegistry, WindowRect,
};

/// Cascading origin for the window created when `open_count` windows are already open.
///
/// The offset is unbounded; a long session can place windows past the viewport edge.
pub fn cascade_position(open_count: usize, config: &DesktopConfig) -> WindowPosition {
    let offset = config.cascade_origin + config.cascade_step * open_count as i32;
    WindowPosition {
        x: offset,
        y: offset,
    }
}

/// Opens a window for `descriptor`, or focuses the existing one with the same id.
///
/// Re-activating an open window only changes `active`: position, order, and minimized state are
/// untouched. Returns `true` when a new window was created.
pub fn activate_window(
    registry: &mut WindowRegistry,
    descriptor: &LaunchableDescriptor,
    config: &DesktopConfig,
) -> bool {
    let window_id = WindowId(descriptor.id.clone());
    if registry.is_open(&window_id) {
        registry.active = Some(window_id);
        return false;
    }

    let position = cascade_position(registry.windows.len(), config);
    registry
        .windows
        .push(WindowRecord::from_descriptor(descriptor, position));
    registry.active = Some(window_id);
    true
}

/// Destroys a window.
///
/// When the closed window was active, focus passes to the most recently created survivor,
/// minimized or not. Returns `true` when a window was removed.
pub fn close_window(registry: &mut WindowRegistry, window_id: &WindowId) -> bool {
    let before_len = registry.windows.len();
    registry.windows.retain(|w| &w.id != window_id);
    registry.minimized.retain(|id| id != window_id);
    if registry.windows.len() == before_len {
        return false;
    }

    if registry.is_active(window_id) {
        registry.active = registry.windows.last().map(|w| w.id.clone());
    }
    true
}

/// Hides a window without destroying it.
///
/// When the minimized window was active, focus passes to the most recently created window that
/// is still visible, or to nothing.
pub fn minimize_window(registry: &mut WindowRegistry, window_id: &WindowId) -> bool {
    if !registry.is_open(window_id) {
        return false;
    }

    let mut changed = false;
    if !registry.is_minimized(window_id) {
        registry.minimized.push(window_id.clone());
        changed = true;
    }

    if registry.is_active(window_id) {
        registry.active = registry.visible_windows().last().map(|w| w.id.clone());
        changed = true;
    }
    changed
}

/// Un-minimizes a window and makes it active.
pub fn restore_window(registry: &mut WindowRegistry, window_id: &WindowId) -> bool {
    if !registry.is_open(window_id) {
        return false;
    }
    registry.minimized.retain(|id| id != window_id);
    registry.active = Some(window_id.clone());
    true
}

/// Makes a window active without touching its minimized state.
pub fn focus_window(registry: &mut WindowRegistry, window_id: &WindowId) -> bool {
    if !registry.is_open(window_id) {
        return false;
    }
    if registry.is_active(window_id) {
        return false;
    }
    registry.active = Some(window_id.clone());
    true
}

/// Stores a new top-left position for a window.
pub fn move_window(
    registry: &mut WindowRegistry,
    window_id: &WindowId,
    position: WindowPosition,
) -> bool {
    let Some(window) = registry.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    if window.position == position {
        return false;
    }
    window.position = position;
    true
}

/// Paint order for a window: creation order, with the active window lifted above the rest.
pub fn paint_z_index(registry: &WindowRegistry, window_id: &WindowId) -> u32 {
    let count = registry.windows.len() as u32;
    if registry.is_active(window_id) {
        return count + 1;
    }
    registry
        .windows
        .iter()
        .position(|w| &w.id == window_id)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(0)
}

/// Frame rect for `window` under the given layout mode.
///
/// Mobile pins every window to a fixed origin and clamps its size to the viewport; desktop uses
/// the stored position and the configured frame size.
pub fn window_frame_rect(
    window: &WindowRecord,
    mobile: bool,
    viewport_width: i32,
    viewport_height: i32,
    config: &DesktopConfig,
) -> WindowRect {
    if mobile {
        return WindowRect {
            x: config.mobile_window_origin.x,
            y: config.mobile_window_origin.y,
            w: (viewport_width - config.mobile_horizontal_margin).min(config.mobile_max_width),
            h: (viewport_height - config.mobile_vertical_margin).min(config.mobile_max_height),
        };
    }

    WindowRect {
        x: window.position.x,
        y: window.position.y,
        w: config.window_width,
        h: config.window_height,
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ContentRef;
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(id: &str) -> LaunchableDescriptor {
        LaunchableDescriptor::new(id, id.to_uppercase(), "*", ContentRef::new(id))
    }

    fn open_all(ids: &[&str]) -> WindowRegistry {
        let config = DesktopConfig::default();
        let mut registry = WindowRegistry::default();
        for id in ids {
            activate_window(&mut registry, &descriptor(id), &config);
        }
        registry
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    #[test]
    fn cascade_offsets_grow_by_step_per_open_window() {
        let registry = open_all(&["a", "b", "c", "d"]);
        let positions: Vec<(i32, i32)> = registry
            .windows
            .iter()
            .map(|w| (w.position.x, w.position.y))
            .collect();
        assert_eq!(positions, vec![(50, 50), (80, 80), (110, 110), (140, 140)]);
    }

    #[test]
    fn cascade_uses_current_count_after_a_close() {
        let config = DesktopConfig::default();
        let mut registry = open_all(&["a", "b"]);
        close_window(&mut registry, &id("a"));
        activate_window(&mut registry, &descriptor("c"), &config);

        assert_eq!(
            registry.get(&id("c")).unwrap().position,
            WindowPosition { x: 80, y: 80 }
        );
    }

    #[test]
    fn reactivating_open_window_only_changes_active() {
        let config = DesktopConfig::default();
        let mut registry = open_all(&["a", "b"]);
        let before = registry.windows.clone();

        let created = activate_window(&mut registry, &descriptor("a"), &config);

        assert!(!created);
        assert_eq!(registry.windows, before);
        assert_eq!(registry.active, Some(id("a")));
    }

    #[test]
    fn reactivating_minimized_window_leaves_it_minimized() {
        let config = DesktopConfig::default();
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("a"));

        activate_window(&mut registry, &descriptor("a"), &config);

        assert!(registry.is_minimized(&id("a")));
        assert_eq!(registry.active, Some(id("a")));
    }

    #[test]
    fn closing_active_window_focuses_last_survivor() {
        let mut registry = open_all(&["a", "b", "c"]);
        focus_window(&mut registry, &id("b"));

        assert!(close_window(&mut registry, &id("b")));

        assert_eq!(registry.active, Some(id("c")));
        assert_eq!(registry.windows.len(), 2);
    }

    #[test]
    fn closing_inactive_window_keeps_active() {
        let mut registry = open_all(&["a", "b", "c"]);
        close_window(&mut registry, &id("a"));
        assert_eq!(registry.active, Some(id("c")));
    }

    #[test]
    fn closing_active_window_can_activate_a_minimized_survivor() {
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("b"));
        focus_window(&mut registry, &id("a"));

        close_window(&mut registry, &id("a"));

        assert_eq!(registry.active, Some(id("b")));
        assert!(registry.is_minimized(&id("b")));
    }

    #[test]
    fn closing_minimized_window_drops_it_from_minimized_set() {
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("a"));

        close_window(&mut registry, &id("a"));

        assert!(registry.minimized.is_empty());
        assert!(!registry.is_open(&id("a")));
    }

    #[test]
    fn closing_last_window_clears_active() {
        let mut registry = open_all(&["a"]);
        close_window(&mut registry, &id("a"));
        assert_eq!(registry.active, None);
    }

    #[test]
    fn close_of_unknown_id_is_noop() {
        let mut registry = open_all(&["a"]);
        let before = registry.clone();
        assert!(!close_window(&mut registry, &id("zzz")));
        assert_eq!(registry, before);
    }

    #[test]
    fn minimize_active_moves_focus_to_last_visible_survivor() {
        let mut registry = open_all(&["a", "b", "c"]);
        minimize_window(&mut registry, &id("b"));

        minimize_window(&mut registry, &id("c"));

        assert_eq!(registry.active, Some(id("a")));
        assert_eq!(registry.minimized, vec![id("b"), id("c")]);
    }

    #[test]
    fn minimize_with_no_visible_survivor_clears_active() {
        let mut registry = open_all(&["a", "b", "c"]);
        minimize_window(&mut registry, &id("b"));
        minimize_window(&mut registry, &id("c"));
        focus_window(&mut registry, &id("a"));

        minimize_window(&mut registry, &id("a"));

        assert_eq!(registry.active, None);
    }

    #[test]
    fn minimize_is_idempotent_for_membership() {
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("a"));
        minimize_window(&mut registry, &id("a"));
        assert_eq!(registry.minimized, vec![id("a")]);
    }

    #[test]
    fn minimize_inactive_window_keeps_active() {
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("a"));
        assert_eq!(registry.active, Some(id("b")));
    }

    #[test]
    fn minimize_unknown_id_is_noop() {
        let mut registry = open_all(&["a"]);
        assert!(!minimize_window(&mut registry, &id("nope")));
        assert!(registry.minimized.is_empty());
    }

    #[test]
    fn restore_forces_focus() {
        let mut registry = open_all(&["a", "b"]);
        minimize_window(&mut registry, &id("a"));
        assert_eq!(registry.active, Some(id("b")));

        restore_window(&mut registry, &id("a"));

        assert_eq!(registry.active, Some(id("a")));
        assert!(!registry.is_minimized(&id("a")));
    }

    #[test]
    fn restore_of_visible_window_just_focuses_it() {
        let mut registry = open_all(&["a", "b"]);
        assert!(restore_window(&mut registry, &id("a")));
        assert_eq!(registry.active, Some(id("a")));
        assert!(registry.minimized.is_empty());
    }

    #[test]
    fn focus_on_unknown_id_is_noop() {
        let mut registry = open_all(&["a"]);
        assert!(!focus_window(&mut registry, &id("ghost")));
        assert_eq!(registry.active, Some(id("a")));
    }

    #[test]
    fn active_window_paints_above_later_windows() {
        let mut registry = open_all(&["a", "b", "c"]);
        focus_window(&mut registry, &id("a"));

        assert_eq!(paint_z_index(&registry, &id("a")), 4);
        assert_eq!(paint_z_index(&registry, &id("b")), 2);
        assert_eq!(paint_z_index(&registry, &id("c")), 3);
    }

    #[test]
    fn desktop_frame_uses_stored_position() {
        let config = DesktopConfig::default();
        let registry = open_all(&["a", "b"]);
        let rect = window_frame_rect(registry.get(&id("b")).unwrap(), false, 1280, 800, &config);
        assert_eq!(
            rect,
            WindowRect {
                x: 80,
                y: 80,
                w: 500,
                h: 400
            }
        );
    }

    #[test]
    fn mobile_frame_is_pinned_and_clamped() {
        let config = DesktopConfig::default();
        let registry = open_all(&["a", "b"]);
        let window = registry.get(&id("b")).unwrap();

        let narrow = window_frame_rect(window, true, 320, 480, &config);
        assert_eq!(
            narrow,
            WindowRect {
                x: 10,
                y: 10,
                w: 300,
                h: 360
            }
        );

        let wide = window_frame_rect(window, true, 700, 1000, &config);
        assert_eq!((wide.w, wide.h), (350, 450));
    }
}
