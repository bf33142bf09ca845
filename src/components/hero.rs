//! Landing hero section.

use leptos::prelude::*;

use crate::util::scroll;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="section hero">
            <h1>"Hi, I\u{2019}m Alex \u{2014} I build things for the web."</h1>
            <p class="hero__tagline">
                "Frontend-leaning developer with a soft spot for small, fast, accessible sites."
            </p>
            <div class="hero__actions">
                <a
                    class="btn btn--primary"
                    href="#projects"
                    on:click=move |ev| scroll::anchor_click(&ev, "#projects")
                >
                    "See my work"
                </a>
                <a
                    class="btn"
                    href="#contact"
                    on:click=move |ev| scroll::anchor_click(&ev, "#contact")
                >
                    "Get in touch"
                </a>
            </div>
        </section>
    }
}
