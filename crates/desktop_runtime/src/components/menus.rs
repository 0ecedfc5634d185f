use super::*;

/// Whether a press landed on the menu itself or on the button that toggles it.
fn press_is_on_start_menu(ev: &web_sys::MouseEvent) -> bool {
    let selector = format!("#{START_MENU_ID}, #{START_BUTTON_ID}");
    event_target_element(ev)
        .and_then(|element| element.closest(&selector).ok().flatten())
        .is_some()
}

/// An open menu closes on any press outside its own surfaces.
fn outside_press_closes_start_menu(menu_open: bool, pressed_on_menu: bool) -> bool {
    menu_open && !pressed_on_menu
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        let menu_open = state.with_untracked(|d| d.start_menu_open);
        if outside_press_closes_start_menu(menu_open, menu_open && press_is_on_start_menu(&ev)) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <Show when=move || state.with(|d| d.start_menu_open) fallback=|| ()>
            <div
                id=START_MENU_ID
                class="start-menu"
                role="menu"
                aria-label="Start menu"
            >
                <div class="start-menu-banner" aria-hidden="true">
                    <span>"Windows 95"</span>
                </div>
                <div class="start-menu-items">
                    <For
                        each=move || runtime.catalog.with_value(|catalog| catalog.entries().to_vec())
                        key=|entry| entry.id.clone()
                        let:entry
                    >
                        {
                            let launch_id = entry.id.clone();
                            view! {
                                <button
                                    id=format!("start-menu-item-{}", entry.id)
                                    type="button"
                                    role="menuitem"
                                    class="start-menu-item"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.launch_from_start_menu(&launch_id);
                                    }
                                >
                                    <span class="start-menu-item-glyph" aria-hidden="true">
                                        {entry.icon_glyph.clone()}
                                    </span>
                                    <span>{entry.title.clone()}</span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{DesktopConfig, DesktopState, InteractionState},
        reducer::reduce_desktop,
    };
    use desktop_app_contract::ContentRef;

    #[test]
    fn presses_on_the_menu_or_start_button_keep_it_open() {
        assert!(!outside_press_closes_start_menu(true, true));
        assert!(outside_press_closes_start_menu(true, false));
        assert!(!outside_press_closes_start_menu(false, false));
    }

    #[test]
    fn pressing_a_menu_item_still_launches_it() {
        let config = DesktopConfig::default();
        let mut desktop = DesktopState::default();
        let mut ui = InteractionState::default();
        reduce_desktop(&mut desktop, &mut ui, &config, DesktopAction::SplashComplete)
            .expect("boot");
        reduce_desktop(&mut desktop, &mut ui, &config, DesktopAction::ToggleStartMenu)
            .expect("open menu");

        // mousedown on the item: the menu stays mounted.
        if outside_press_closes_start_menu(desktop.start_menu_open, true) {
            reduce_desktop(&mut desktop, &mut ui, &config, DesktopAction::CloseStartMenu)
                .expect("close");
        }
        assert!(desktop.start_menu_open);

        // click on the item.
        let descriptor = LaunchableDescriptor::new("mail", "Mail Me", "📧", ContentRef::new("mail"));
        reduce_desktop(
            &mut desktop,
            &mut ui,
            &config,
            DesktopAction::LaunchFromStartMenu { descriptor },
        )
        .expect("launch");

        assert!(desktop.registry.is_open(&WindowId::from("mail")));
        assert!(!desktop.start_menu_open);
    }
}
