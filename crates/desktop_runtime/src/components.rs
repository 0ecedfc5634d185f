//! Desktop shell UI composition and interaction surfaces.

mod boot_screens;
mod menus;
mod taskbar;
mod touch;
mod window;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{
    boot_screens::{MobileWarningDialog, SplashScreen},
    menus::StartMenu,
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    model::{BootPhase, DesktopState, PointerPosition, WindowId},
    reducer::DesktopAction,
};
use desktop_app_contract::LaunchableDescriptor;

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DESKTOP_ROOT_ID: &str = "desktop-shell-root";
const START_MENU_ID: &str = "desktop-launcher-menu";
const START_BUTTON_ID: &str = "taskbar-start-button";

fn event_target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

/// Id of the element an event was dispatched to, if it is an element.
fn event_target_element_id(ev: &web_sys::Event) -> Option<String> {
    event_target_element(ev).map(|element| element.id())
}

/// A press on the bare desktop, not on any icon, window, or bar painted above it.
fn is_background_press(target_id: Option<&str>) -> bool {
    target_id == Some(DESKTOP_ROOT_ID)
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn desktop_root_class(desktop: &DesktopState) -> String {
    let mut class = String::from("desktop-shell");
    if desktop.effective_wallpaper().is_none() {
        class.push_str(" desktop-pattern");
    }
    if desktop.is_mobile() {
        class.push_str(" mobile");
    }
    class
}

/// Percent-encodes the characters that could end a quoted CSS `url()` or the style attribute.
fn css_url_literal(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\'' => escaped.push_str("%27"),
            '"' => escaped.push_str("%22"),
            '(' => escaped.push_str("%28"),
            ')' => escaped.push_str("%29"),
            '\\' => escaped.push_str("%5C"),
            ';' => escaped.push_str("%3B"),
            ch if ch.is_control() => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    escaped.push_str(&format!("%{byte:02X}"));
                }
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}

fn desktop_root_style(desktop: &DesktopState) -> String {
    match desktop.effective_wallpaper() {
        Some(url) => format!(
            "background-image:url('{}');background-size:cover;background-position:center;background-repeat:no-repeat;",
            css_url_literal(url)
        ),
        None => String::new(),
    }
}

#[component]
/// Renders the full desktop shell: boot screens, icons, windows, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let (width, height) = runtime.host.get_value().viewport_size();
        runtime.dispatch_action(DesktopAction::ViewportResized { width, height });
    });
    on_cleanup(move || resize_listener.remove());
    touch::install_touch_guards(runtime.config.with_value(|config| config.touch_guard_ms));

    let on_root_click = move |ev: web_sys::MouseEvent| {
        if !is_background_press(event_target_element_id(&ev).as_deref()) {
            return;
        }
        if state.with_untracked(|desktop| desktop.is_interactive()) {
            runtime.dispatch_action(DesktopAction::DismissOverlays);
        }
    };
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id=DESKTOP_ROOT_ID
            class=move || state.with(desktop_root_class)
            style=move || state.with(desktop_root_style)
            on:click:undelegated=on_root_click
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <Show when=move || state.with(|d| d.boot == BootPhase::Splashing) fallback=|| ()>
                <SplashScreen />
            </Show>
            <Show
                when=move || state.with(|d| d.boot != BootPhase::Splashing && d.mobile_warning_visible)
                fallback=|| ()
            >
                <MobileWarningDialog />
            </Show>
            <Show when=move || state.with(DesktopState::is_interactive) fallback=|| ()>
                <DesktopIcons />
                <div class="window-layer">
                    <For
                        each=move || {
                            state.with(|d| {
                                d.registry.windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>()
                            })
                        }
                        key=|window_id| window_id.clone()
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>
                <StartMenu />
                <Taskbar />
            </Show>
        </div>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div class=move || {
            if state.with(DesktopState::is_mobile) {
                "desktop-icons desktop-icons-mobile"
            } else {
                "desktop-icons"
            }
        }>
            <For
                each=move || runtime.catalog.with_value(|catalog| catalog.entries().to_vec())
                key=|entry| entry.id.clone()
                let:entry
            >
                <DesktopIcon descriptor=entry />
            </For>
        </div>
    }
}

#[component]
fn DesktopIcon(descriptor: LaunchableDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_id = descriptor.id.clone();
    let selected = {
        let icon_id = icon_id.clone();
        move || {
            runtime
                .state
                .with(|d| d.selected_icon.as_deref() == Some(icon_id.as_str()))
        }
    };
    let on_select = {
        let icon_id = icon_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::SelectIcon {
                icon_id: icon_id.clone(),
            });
        }
    };
    let on_open = move |_| runtime.activate_launchable(&icon_id);

    view! {
        <button
            type="button"
            class=move || if selected() { "desktop-icon selected" } else { "desktop-icon" }
            aria-label=descriptor.title.clone()
            on:click=on_select
            on:dblclick=on_open
        >
            <span class="desktop-icon-glyph" aria-hidden="true">{descriptor.icon_glyph.clone()}</span>
            <span class="desktop-icon-label">{descriptor.title.clone()}</span>
        </button>
    }
}

/// DOM id of the taskbar button for a minimized window.
fn taskbar_window_button_dom_id(window_id: &WindowId) -> String {
    format!("taskbar-window-button-{window_id}")
}
