//! Projects section: the card grid fed from the fixed record list.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{grid_key, sample_projects};

/// `#projects-grid` rendered from the project list.
///
/// Entries are keyed by position plus the full record (`grid_key`), so a
/// change to the data fully replaces the previous cards rather than
/// appending to or reusing them; stale nodes never accumulate.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = RwSignal::new(sample_projects());

    view! {
        <section id="projects" class="section">
            <h2>"Projects"</h2>
            <div id="projects-grid" class="projects-grid">
                <For
                    each=move || projects.get().into_iter().enumerate()
                    key=|(index, project)| grid_key(*index, project)
                    children=|(_, project)| view! { <ProjectCard project=project/> }
                />
            </div>
        </section>
    }
}
