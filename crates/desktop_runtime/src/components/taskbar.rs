use std::time::Duration;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

/// Formats a 12-hour clock label such as `9:05 AM`.
fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    let hour = match snapshot.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {suffix}", snapshot.minute)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let minimized = move || {
        state.with(|desktop| {
            desktop
                .registry
                .minimized_windows()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Desktop taskbar">
            <button
                id=START_BUTTON_ID
                type="button"
                class=move || {
                    if state.with(|d| d.start_menu_open) {
                        "taskbar-start pressed"
                    } else {
                        "taskbar-start"
                    }
                }
                aria-haspopup="menu"
                aria-controls=START_MENU_ID
                aria-expanded=move || state.with(|d| d.start_menu_open)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span class="taskbar-start-glyph" aria-hidden="true">"🪟"</span>
                <span>"Start"</span>
            </button>
            <div class="taskbar-windows" role="group" aria-label="Minimized windows">
                <For each=minimized key=|win| win.id.clone() let:win>
                    {
                        let window_id = win.id.clone();
                        view! {
                            <button
                                id=taskbar_window_button_dom_id(&win.id)
                                type="button"
                                class="taskbar-window"
                                aria-label=format!("Restore {}", win.title)
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::RestoreWindow {
                                        window_id: window_id.clone(),
                                    });
                                }
                            >
                                <span class="taskbar-window-glyph" aria-hidden="true">
                                    {win.icon_glyph.clone()}
                                </span>
                                <span class="taskbar-window-title">{win.title.clone()}</span>
                            </button>
                        }
                    }
                </For>
            </div>
            <div class="taskbar-clock" aria-live="off">
                {move || format_taskbar_clock(clock_now.get())}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_twelve_hour_format() {
        let at = |hour, minute| format_taskbar_clock(TaskbarClockSnapshot { hour, minute });
        assert_eq!(at(0, 0), "12:00 AM");
        assert_eq!(at(9, 5), "9:05 AM");
        assert_eq!(at(12, 30), "12:30 PM");
        assert_eq!(at(23, 59), "11:59 PM");
    }
}
