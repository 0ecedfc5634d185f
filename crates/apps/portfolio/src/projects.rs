use leptos::*;
use serde::Deserialize;

const PROJECTS_JSON: &str = include_str!("../content/projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ProjectCard {
    name: String,
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    link: Option<String>,
}

fn load_projects() -> Result<Vec<ProjectCard>, serde_json::Error> {
    serde_json::from_str(PROJECTS_JSON)
}

#[component]
/// Project cards rendered from the bundled project list.
pub fn ProjectsPanel() -> impl IntoView {
    let cards = match load_projects() {
        Ok(cards) => cards,
        Err(err) => {
            logging::warn!("project list failed to parse: {err}");
            Vec::new()
        }
    };

    view! {
        <article class="panel projects-panel">
            <h2>"Projects"</h2>
            <Show when={
                let empty = cards.is_empty();
                move || empty
            }>
                <p class="panel-empty">"No projects to show right now."</p>
            </Show>
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <section class="project-card">
                            <h3>{card.name}</h3>
                            <p>{card.summary}</p>
                            <ul class="project-tags">
                                {card.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                            </ul>
                            {card
                                .link
                                .map(|href| {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer">
                                            "View project"
                                        </a>
                                    }
                                })}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_project_list_parses() {
        let cards = load_projects().expect("bundled projects.json");
        assert!(!cards.is_empty());
        assert!(cards.iter().all(|card| !card.name.is_empty()));
    }

    #[test]
    fn missing_optional_fields_default() {
        let cards: Vec<ProjectCard> =
            serde_json::from_str(r#"[{"name":"x","summary":"y"}]"#).expect("parse");
        assert_eq!(cards[0].tags, Vec::<String>::new());
        assert_eq!(cards[0].link, None);
    }
}
