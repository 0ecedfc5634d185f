//! Viewport classification for the layout policy.
//!
//! The monitor never touches the window registry. Its only side effect beyond the mode flag is
//! re-arming the mobile warning on every resize that lands below the breakpoint.

use crate::model::{DesktopConfig, DesktopState, LayoutMode};

pub fn classify_width(width: i32, config: &DesktopConfig) -> LayoutMode {
    if width < config.mobile_breakpoint_px {
        LayoutMode::Mobile
    } else {
        LayoutMode::Desktop
    }
}

/// Records a new viewport size. Returns `true` when the mobile warning was armed, which happens for
/// every mobile-width observation, even one that keeps the layout mobile.
pub fn observe_viewport(
    state: &mut DesktopState,
    width: i32,
    height: i32,
    config: &DesktopConfig,
) -> bool {
    let mode = classify_width(width, config);
    let is_mobile = mode == LayoutMode::Mobile;

    state.viewport.width = width;
    state.viewport.height = height;
    state.viewport.mode = mode;

    if is_mobile {
        state.mobile_warning_visible = true;
    }
    is_mobile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boot, model::BootPhase};

    #[test]
    fn breakpoint_is_exclusive() {
        let config = DesktopConfig::default();
        assert_eq!(classify_width(767, &config), LayoutMode::Mobile);
        assert_eq!(classify_width(768, &config), LayoutMode::Desktop);
    }

    #[test]
    fn shrinking_to_mobile_after_boot_rearms_warning() {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        boot::complete_splash(&mut state);
        assert_eq!(state.boot, BootPhase::Ready);

        assert!(observe_viewport(&mut state, 400, 700, &config));

        assert!(state.mobile_warning_visible);
        assert!(!state.is_interactive());
        assert_eq!(state.boot, BootPhase::Ready);
    }

    #[test]
    fn every_mobile_resize_rearms_after_dismissal() {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        observe_viewport(&mut state, 400, 700, &config);
        boot::complete_splash(&mut state);
        boot::dismiss_mobile_warning(&mut state);
        assert!(state.is_interactive());

        // Rotating a phone keeps the layout mobile but still brings the warning back.
        assert!(observe_viewport(&mut state, 700, 400, &config));
        assert!(state.mobile_warning_visible);
        assert_eq!(state.viewport.mode, LayoutMode::Mobile);
        assert_eq!(state.viewport.width, 700);
    }

    #[test]
    fn desktop_resizes_never_arm_the_warning() {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();

        assert!(!observe_viewport(&mut state, 1280, 800, &config));
        assert!(!observe_viewport(&mut state, 768, 600, &config));
        assert!(!state.mobile_warning_visible);
    }

    #[test]
    fn growing_to_desktop_keeps_warning_until_dismissed() {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        observe_viewport(&mut state, 400, 700, &config);

        observe_viewport(&mut state, 1200, 900, &config);

        assert_eq!(state.viewport.mode, LayoutMode::Desktop);
        assert!(state.mobile_warning_visible);
    }
}
