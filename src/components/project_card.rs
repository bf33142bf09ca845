//! One project card in the projects grid.

use leptos::prelude::*;

use crate::state::projects::Project;

/// Card for a single project: thumbnail, title, description, and one chip
/// per technology tag, in record order.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let src = project.thumbnail_url();
    let alt = project.alt_text();

    let chips = project
        .tech
        .iter()
        .map(|tag| view! { <span class="chip">{tag.clone()}</span> })
        .collect::<Vec<_>>();

    view! {
        <article class="card">
            <div class="thumb">
                <img src=src alt=alt loading="lazy"/>
            </div>
            <div class="card-body">
                <div class="meta">
                    <h3>{project.title.clone()}</h3>
                </div>
                <p>{project.desc.clone()}</p>
                <div class="tech">{chips}</div>
            </div>
        </article>
    }
}
