//! Page-level touch guards that keep pinch and double-tap from zooming the desktop.
//!
//! Double-tap is how icons open on phones, so the browser's own double-tap zoom has to be
//! suppressed. Both listeners are registered with `passive: false`; a passive touch listener
//! cannot cancel the default action.

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TouchGuard {
    last_touch_end_ms: Option<f64>,
}

impl TouchGuard {
    /// Multi-finger touches start a pinch.
    fn blocks_touch_start(touch_count: u32) -> bool {
        touch_count > 1
    }

    /// Records a touch end and reports whether it completes a double-tap within `guard_ms`.
    fn record_touch_end(&mut self, now_ms: f64, guard_ms: f64) -> bool {
        let blocked = self
            .last_touch_end_ms
            .is_some_and(|last| now_ms - last <= guard_ms);
        self.last_touch_end_ms = Some(now_ms);
        blocked
    }
}

#[cfg(target_arch = "wasm32")]
pub(super) fn install_touch_guards(guard_ms: u64) {
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let guard = store_value(TouchGuard::default());
    let guard_ms = guard_ms as f64;

    let on_touch_start = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        move |ev: web_sys::TouchEvent| {
            if TouchGuard::blocks_touch_start(ev.touches().length()) {
                ev.prevent_default();
            }
        },
    );
    let on_touch_end = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        move |ev: web_sys::TouchEvent| {
            let now_ms = ev.time_stamp();
            let blocked = guard
                .try_update_value(|guard| guard.record_touch_end(now_ms, guard_ms))
                .unwrap_or(false);
            if blocked {
                ev.prevent_default();
            }
        },
    );

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    for (event_name, listener) in [("touchstart", &on_touch_start), ("touchend", &on_touch_end)] {
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            listener.as_ref().unchecked_ref(),
            &options,
        ) {
            logging::warn!("{event_name} guard not installed: {err:?}");
        }
    }

    on_cleanup(move || {
        for (event_name, listener) in [("touchstart", &on_touch_start), ("touchend", &on_touch_end)]
        {
            let _ = window
                .remove_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn install_touch_guards(_guard_ms: u64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_starts_are_blocked_single_touches_are_not() {
        assert!(!TouchGuard::blocks_touch_start(1));
        assert!(TouchGuard::blocks_touch_start(2));
    }

    #[test]
    fn second_tap_inside_the_window_is_blocked() {
        let mut guard = TouchGuard::default();
        assert!(!guard.record_touch_end(1_000.0, 300.0));
        assert!(guard.record_touch_end(1_300.0, 300.0));
        assert!(!guard.record_touch_end(1_700.0, 300.0));
    }

    #[test]
    fn blocked_taps_still_reset_the_window() {
        let mut guard = TouchGuard::default();
        guard.record_touch_end(0.0, 300.0);
        guard.record_touch_end(200.0, 300.0);
        // Measured from the blocked tap at 200, not the first at 0.
        assert!(guard.record_touch_end(450.0, 300.0));
    }
}
