use leptos::*;
use serde::Deserialize;

const DRAWINGS_JSON: &str = include_str!("../content/drawings.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Drawing {
    title: String,
    src: String,
    year: u16,
}

fn load_drawings() -> Result<Vec<Drawing>, serde_json::Error> {
    let mut drawings: Vec<Drawing> = serde_json::from_str(DRAWINGS_JSON)?;
    drawings.sort_by(|a, b| b.year.cmp(&a.year));
    Ok(drawings)
}

#[component]
/// Gallery of drawings; clicking a thumbnail shows it full-size inside the window.
pub fn DrawingsGallery() -> impl IntoView {
    let drawings = load_drawings().unwrap_or_else(|err| {
        logging::warn!("drawing list failed to parse: {err}");
        Vec::new()
    });
    let focused = create_rw_signal(None::<Drawing>);

    view! {
        <article class="panel drawings-panel">
            <Show
                when=move || focused.with(Option::is_some)
                fallback=move || {
                    view! {
                        <div class="drawings-grid">
                            {drawings
                                .iter()
                                .cloned()
                                .map(|drawing| {
                                    let label = format!("{} ({})", drawing.title, drawing.year);
                                    let src = drawing.src.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="drawing-thumb"
                                            aria-label=label.clone()
                                            on:click=move |_| focused.set(Some(drawing.clone()))
                                        >
                                            <img src=src alt=label.clone() loading="lazy" />
                                            <span>{label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            >
                {move || {
                    focused
                        .get()
                        .map(|drawing| {
                            view! {
                                <figure class="drawing-full">
                                    <img src=drawing.src alt=drawing.title.clone() />
                                    <figcaption>{drawing.title}</figcaption>
                                    <button type="button" on:click=move |_| focused.set(None)>
                                        "Back"
                                    </button>
                                </figure>
                            }
                        })
                }}
            </Show>
        </article>
    }
}
