use std::time::Duration;

use super::*;

#[component]
pub(super) fn SplashScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let duration_ms = runtime.config.with_value(|config| config.splash_duration_ms);

    match set_timeout_with_handle(
        move || runtime.dispatch_action(DesktopAction::SplashComplete),
        Duration::from_millis(duration_ms),
    ) {
        Ok(timeout) => on_cleanup(move || timeout.clear()),
        Err(err) => {
            logging::warn!("splash timer unavailable, skipping splash: {err:?}");
            runtime.dispatch_action(DesktopAction::SplashComplete);
        }
    }

    view! {
        <div class="splash-screen" role="status" aria-live="polite">
            <div class="splash-logo" aria-hidden="true">"🪟"</div>
            <h1 class="splash-title">"Windows 95"</h1>
            <div class="splash-progress" aria-hidden="true">
                <div
                    class="splash-progress-fill"
                    style=format!("animation-duration:{duration_ms}ms;")
                ></div>
            </div>
            <p class="splash-caption">"Starting up..."</p>
        </div>
    }
}

#[component]
pub(super) fn MobileWarningDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="mobile-warning-backdrop">
            <div
                class="mobile-warning"
                role="alertdialog"
                aria-labelledby="mobile-warning-title"
                aria-describedby="mobile-warning-body"
            >
                <h3 id="mobile-warning-title">"Windows 95"</h3>
                <p id="mobile-warning-body">
                    "For the best experience, please use this on a larger screen (PC)."
                </p>
                <button
                    type="button"
                    class="mobile-warning-continue"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::DismissMobileWarning);
                    }
                >
                    "Continue"
                </button>
            </div>
        </div>
    }
}
