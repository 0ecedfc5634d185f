use super::*;
use crate::window_manager::{paint_z_index, window_frame_rect};
use desktop_app_contract::ContentMountContext;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_id = store_value(window_id);

    let window = Signal::derive(move || {
        state.with(|desktop| desktop.registry.get(&window_id.get_value()).cloned())
    });
    let is_active =
        Signal::derive(move || state.with(|d| d.registry.is_active(&window_id.get_value())));
    let is_minimized =
        Signal::derive(move || state.with(|d| d.registry.is_minimized(&window_id.get_value())));

    let frame_style = move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        let rect = state.with(|desktop| {
            runtime.config.with_value(|config| {
                window_frame_rect(
                    &win,
                    desktop.is_mobile(),
                    desktop.viewport.width,
                    desktop.viewport.height,
                    config,
                )
            })
        });
        let z_index = state.with(|desktop| paint_z_index(&desktop.registry, &win.id));
        let display = if is_minimized.get() { "display:none;" } else { "" };
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
            rect.x, rect.y, rect.w, rect.h, z_index, display
        )
    };

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        if state.with_untracked(DesktopState::is_mobile) {
            return;
        }
        try_set_pointer_capture(&ev);
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: window_id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    };

    let title = move || window.get().map(|w| w.title).unwrap_or_default();
    let glyph = move || window.get().map(|w| w.icon_glyph).unwrap_or_default();

    view! {
        <section
            class=move || if is_active.get() { "desktop-window active" } else { "desktop-window" }
            style=frame_style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header class="titlebar" on:pointerdown:undelegated=begin_move>
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">{glyph}</span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown:undelegated=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown:undelegated=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id.get_value() />
            </div>
        </section>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Mounted once per window lifetime so panel-local state survives minimize and restore.
    let content = runtime
        .state
        .with_untracked(|desktop| desktop.registry.get(&window_id).map(|w| w.content.clone()));

    match content {
        Some(content) => {
            let ctx = ContentMountContext {
                window_id: window_id.to_string(),
                content,
                wallpaper: runtime.wallpaper_binding(),
            };
            runtime.content.with_value(|module| module.mount(ctx))
        }
        None => ().into_view(),
    }
}
