//! Portfolio content panels and the default launch catalog for the desktop shell.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod background;
mod drawings;
mod mail;
mod projects;
mod resume;

use desktop_app_contract::{
    ContentModule, ContentMountContext, ContentRef, LaunchCatalog, LaunchableDescriptor,
};
use leptos::*;

pub use background::{BackgroundPicker, WallpaperPreset, WALLPAPER_PRESETS};
pub use drawings::DrawingsGallery;
pub use mail::{MailForm, MAIL_RECIPIENT};
pub use projects::ProjectsPanel;
pub use resume::ResumePanel;

const RESUME: &str = "resume";
const PROJECTS: &str = "projects";
const MAIL: &str = "mail";
const DRAWINGS: &str = "drawings";
const BACKGROUND: &str = "bg";

/// Launchables shown on the desktop and in the start menu, in display order.
pub fn portfolio_catalog() -> LaunchCatalog {
    LaunchCatalog::new([
        LaunchableDescriptor::new(RESUME, "Resume", "📄", ContentRef::new(RESUME)),
        LaunchableDescriptor::new(PROJECTS, "Projects", "💼", ContentRef::new(PROJECTS)),
        LaunchableDescriptor::new(MAIL, "Mail Me", "📧", ContentRef::new(MAIL)),
        LaunchableDescriptor::new(DRAWINGS, "Drawings", "🎨", ContentRef::new(DRAWINGS)),
        LaunchableDescriptor::new(
            BACKGROUND,
            "Change Background",
            "🖼️",
            ContentRef::new(BACKGROUND),
        ),
    ])
}

/// Renderer resolving the catalog's content handles into panels.
pub fn content_module() -> ContentModule {
    ContentModule::new(mount_content)
}

fn mount_content(ctx: ContentMountContext) -> View {
    match ctx.content.as_str() {
        RESUME => view! { <ResumePanel /> }.into_view(),
        PROJECTS => view! { <ProjectsPanel /> }.into_view(),
        MAIL => view! { <MailForm /> }.into_view(),
        DRAWINGS => view! { <DrawingsGallery /> }.into_view(),
        BACKGROUND => view! { <BackgroundPicker wallpaper=ctx.wallpaper /> }.into_view(),
        other => {
            logging::warn!("window `{}` has no content for `{other}`", ctx.window_id);
            view! { <p class="content-missing">"Nothing to show here."</p> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_lists_panels_in_display_order() {
        let catalog = portfolio_catalog();
        let labels: Vec<_> = catalog
            .entries()
            .iter()
            .map(|entry| (entry.id.as_str(), entry.icon_glyph.as_str(), entry.title.as_str()))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("resume", "📄", "Resume"),
                ("projects", "💼", "Projects"),
                ("mail", "📧", "Mail Me"),
                ("drawings", "🎨", "Drawings"),
                ("bg", "🖼️", "Change Background"),
            ]
        );
    }

    #[test]
    fn every_entry_points_at_its_own_panel() {
        for entry in portfolio_catalog().entries() {
            assert_eq!(entry.content.as_str(), entry.id);
        }
    }
}
