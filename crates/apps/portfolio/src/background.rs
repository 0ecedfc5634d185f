use desktop_app_contract::WallpaperBinding;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A bundled wallpaper choice.
pub struct WallpaperPreset {
    /// Label shown in the picker.
    pub label: &'static str,
    /// Image URL stored as the wallpaper value.
    pub url: &'static str,
}

/// Wallpapers offered by the background picker, in display order.
pub const WALLPAPER_PRESETS: &[WallpaperPreset] = &[
    WallpaperPreset {
        label: "Clouds",
        url: "/wallpapers/clouds.jpg",
    },
    WallpaperPreset {
        label: "Rolling Hills",
        url: "/wallpapers/hills.jpg",
    },
    WallpaperPreset {
        label: "Night Sky",
        url: "/wallpapers/night-sky.jpg",
    },
];

/// Trims a user-entered URL; blank input means the default background.
fn normalize_custom_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
/// Wallpaper picker writing through the shared wallpaper binding.
pub fn BackgroundPicker(wallpaper: WallpaperBinding) -> impl IntoView {
    let custom_url = create_rw_signal(String::new());
    let is_current = move |url: Option<&str>| wallpaper.current.with(|c| c.as_deref() == url);

    view! {
        <div class="panel background-panel">
            <h2>"Change Background"</h2>
            <div class="background-options" role="radiogroup" aria-label="Wallpaper">
                <button
                    type="button"
                    role="radio"
                    class="win95-button"
                    aria-checked=move || is_current(None).to_string()
                    on:click=move |_| wallpaper.set(None)
                >
                    "(None)"
                </button>
                {WALLPAPER_PRESETS
                    .iter()
                    .map(|preset| {
                        let url = preset.url;
                        view! {
                            <button
                                type="button"
                                role="radio"
                                class="win95-button background-preset"
                                aria-checked=move || is_current(Some(url)).to_string()
                                on:click=move |_| wallpaper.set(Some(url.to_string()))
                            >
                                <img src=url alt="" aria-hidden="true" />
                                <span>{preset.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <form
                class="background-custom"
                on:submit=move |ev| {
                    ev.prevent_default();
                    wallpaper.set(normalize_custom_url(&custom_url.get_untracked()));
                }
            >
                <label>
                    "Image URL"
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || custom_url.get()
                        on:input=move |ev| custom_url.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="win95-button">"Apply"</button>
            </form>
        </div>
    }
}
