//! Root application component composing the portfolio page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills::Skills;

/// Root component: header, page sections, footer.
///
/// The scroll-reveal watcher is installed from an effect so it runs after the
/// initial render, once every section and card is in the document.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    Effect::new(move || {
        crate::util::reveal::install();
    });

    view! {
        <Title text="Portfolio"/>

        <NavBar/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <ProjectsSection/>
            <section id="contact" class="section">
                <h2>"Contact"</h2>
                <ContactForm/>
            </section>
        </main>
        <Footer/>
    }
}
