//! Browser viewport measurement.

/// Width assumed when the browser window cannot be queried (non-wasm targets, detached docs).
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
/// Height assumed when the browser window cannot be queried.
pub const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Returns the current `(innerWidth, innerHeight)` of the browser window in CSS pixels.
pub fn viewport_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
            return (width, height);
        }
    }

    (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_targets_report_fallback_size() {
        assert_eq!(
            viewport_size(),
            (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
        );
    }
}
