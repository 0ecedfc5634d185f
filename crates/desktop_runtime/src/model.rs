use desktop_app_contract::{ContentRef, LaunchableDescriptor};
use serde::{Deserialize, Serialize};

/// Width below which the viewport is classified as mobile.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Frame rectangle computed by the layout policy for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon_glyph: String,
    pub content: ContentRef,
    pub position: WindowPosition,
}

impl WindowRecord {
    pub fn from_descriptor(descriptor: &LaunchableDescriptor, position: WindowPosition) -> Self {
        Self {
            id: WindowId(descriptor.id.clone()),
            title: descriptor.title.clone(),
            icon_glyph: descriptor.icon_glyph.clone(),
            content: descriptor.content.clone(),
            position,
        }
    }
}

/// Open windows in creation order, the minimized subset, and the active window.
///
/// `minimized` keeps minimization order (the taskbar lists buttons in that order) but holds each
/// id at most once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRegistry {
    pub windows: Vec<WindowRecord>,
    pub minimized: Vec<WindowId>,
    pub active: Option<WindowId>,
}

impl WindowRegistry {
    pub fn get(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.get(window_id).is_some()
    }

    pub fn is_minimized(&self, window_id: &WindowId) -> bool {
        self.minimized.contains(window_id)
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active.as_ref() == Some(window_id)
    }

    /// Open windows that are not minimized, in creation order.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows
            .iter()
            .filter(move |w| !self.minimized.contains(&w.id))
    }

    /// Minimized windows in minimization order.
    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.minimized.iter().filter_map(move |id| self.get(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BootPhase {
    #[default]
    Splashing,
    MobileWarning,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub width: i32,
    pub height: i32,
    pub mode: LayoutMode,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            mode: LayoutMode::Desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallpaperState {
    pub url: Option<String>,
    /// Set once the persisted preference has been read, whether or not the read succeeded.
    pub loaded: bool,
}

/// Policy constants for layout, boot timing, and persistence keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub mobile_breakpoint_px: i32,
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub window_width: i32,
    pub window_height: i32,
    pub mobile_window_origin: WindowPosition,
    pub mobile_max_width: i32,
    pub mobile_max_height: i32,
    pub mobile_horizontal_margin: i32,
    pub mobile_vertical_margin: i32,
    pub splash_duration_ms: u64,
    /// A touch ending this soon after the previous one is treated as a zoom double-tap.
    pub touch_guard_ms: u64,
    pub wallpaper_pref_key: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            cascade_origin: 50,
            cascade_step: 30,
            window_width: 500,
            window_height: 400,
            mobile_window_origin: WindowPosition { x: 10, y: 10 },
            mobile_max_width: 350,
            mobile_max_height: 450,
            mobile_horizontal_margin: 20,
            mobile_vertical_margin: 120,
            splash_duration_ms: 2_500,
            touch_guard_ms: 300,
            wallpaper_pref_key: "wallpaperUrl".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub boot: BootPhase,
    pub registry: WindowRegistry,
    pub selected_icon: Option<String>,
    pub start_menu_open: bool,
    pub viewport: ViewportState,
    /// Independent of `boot`: the viewport monitor can re-arm it after boot.
    pub mobile_warning_visible: bool,
    pub wallpaper: WallpaperState,
}

impl DesktopState {
    /// Whether icon, menu and window operations have an entry point.
    pub fn is_interactive(&self) -> bool {
        self.boot == BootPhase::Ready && !self.mobile_warning_visible
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.mode == LayoutMode::Mobile
    }

    /// Wallpaper URL to paint, if any. `None` means the patterned default background.
    pub fn effective_wallpaper(&self) -> Option<&str> {
        if !self.wallpaper.loaded || self.boot == BootPhase::Splashing {
            return None;
        }
        self.wallpaper.url.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
