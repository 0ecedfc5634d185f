use leptos::*;

struct ResumeRole {
    title: &'static str,
    org: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: &[ResumeRole] = &[
    ResumeRole {
        title: "Software Engineer",
        org: "Independent",
        period: "2022 - present",
        highlights: &[
            "Builds web frontends in Rust and WebAssembly.",
            "Maintains small open-source UI experiments.",
        ],
    },
    ResumeRole {
        title: "Frontend Developer",
        org: "Agency work",
        period: "2019 - 2022",
        highlights: &[
            "Shipped marketing and e-commerce sites for a dozen clients.",
            "Introduced component libraries and visual regression tests.",
        ],
    },
];

const SKILLS: &[&str] = &["Rust", "TypeScript", "Leptos", "React", "CSS", "Accessibility"];

#[component]
/// Static resume panel.
pub fn ResumePanel() -> impl IntoView {
    view! {
        <article class="panel resume-panel">
            <h2>"Resume"</h2>
            {ROLES
                .iter()
                .map(|role| {
                    view! {
                        <section class="resume-role">
                            <h3>{role.title} " - " {role.org}</h3>
                            <p class="resume-period">{role.period}</p>
                            <ul>
                                {role.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
            <h3>"Skills"</h3>
            <ul class="resume-skills">
                {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
            </ul>
        </article>
    }
}
