//! One-shot boot gate: splash screen, then an optional mobile-capability warning.

use crate::model::{BootPhase, DesktopState};

/// Leaves the splash screen.
///
/// The mobile decision reads the viewport mode captured at this moment. A warning the viewport
/// monitor armed during the splash is honoured too. Returns `true` when the phase changed; later
/// splash signals are ignored.
pub fn complete_splash(state: &mut DesktopState) -> bool {
    if state.boot != BootPhase::Splashing {
        return false;
    }

    if state.is_mobile() {
        state.mobile_warning_visible = true;
    }
    state.boot = if state.mobile_warning_visible {
        BootPhase::MobileWarning
    } else {
        BootPhase::Ready
    };
    true
}

/// Hides the mobile warning; finishes boot if it was waiting on the dismissal.
///
/// Dismissal during the splash is ignored because the warning is not shown yet.
pub fn dismiss_mobile_warning(state: &mut DesktopState) -> bool {
    match state.boot {
        BootPhase::Splashing => false,
        BootPhase::MobileWarning => {
            state.mobile_warning_visible = false;
            state.boot = BootPhase::Ready;
            true
        }
        BootPhase::Ready => {
            let was_visible = state.mobile_warning_visible;
            state.mobile_warning_visible = false;
            was_visible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutMode;

    #[test]
    fn desktop_viewport_boots_straight_to_ready() {
        let mut state = DesktopState::default();
        assert!(complete_splash(&mut state));
        assert_eq!(state.boot, BootPhase::Ready);
        assert!(state.is_interactive());
    }

    #[test]
    fn mobile_viewport_waits_for_dismissal() {
        let mut state = DesktopState::default();
        state.viewport.mode = LayoutMode::Mobile;

        complete_splash(&mut state);
        assert_eq!(state.boot, BootPhase::MobileWarning);
        assert!(!state.is_interactive());

        assert!(dismiss_mobile_warning(&mut state));
        assert_eq!(state.boot, BootPhase::Ready);
        assert!(state.is_interactive());
    }

    #[test]
    fn splash_completes_only_once() {
        let mut state = DesktopState::default();
        complete_splash(&mut state);
        state.viewport.mode = LayoutMode::Mobile;

        assert!(!complete_splash(&mut state));
        assert_eq!(state.boot, BootPhase::Ready);
        assert!(!state.mobile_warning_visible);
    }

    #[test]
    fn warning_armed_during_splash_is_shown_after_it() {
        let mut state = DesktopState::default();
        state.mobile_warning_visible = true;

        complete_splash(&mut state);

        assert_eq!(state.boot, BootPhase::MobileWarning);
    }

    #[test]
    fn dismissal_during_splash_is_ignored() {
        let mut state = DesktopState::default();
        state.mobile_warning_visible = true;
        assert!(!dismiss_mobile_warning(&mut state));
        assert_eq!(state.boot, BootPhase::Splashing);
        assert!(state.mobile_warning_visible);
    }
}
