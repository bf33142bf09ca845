//! Skills section, grouped by category.

use leptos::prelude::*;

/// Skill groups rendered as `.skill-category` blocks, which also makes them
/// reveal targets alongside sections and cards.
#[component]
pub fn Skills() -> impl IntoView {
    let groups: [(&str, &[&str]); 3] = [
        ("Languages", &["Rust", "TypeScript", "HTML", "CSS"]),
        ("Frameworks", &["Leptos", "Axum", "Node.js"]),
        ("Tooling", &["Git", "Trunk", "Docker"]),
    ];

    view! {
        <section id="skills" class="section">
            <h2>"Skills"</h2>
            <div class="skills">
                {groups
                    .into_iter()
                    .map(|(name, items)| {
                        view! {
                            <div class="skill-category">
                                <h3>{name}</h3>
                                <ul>
                                    {items
                                        .iter()
                                        .map(|&item| view! { <li>{item}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
