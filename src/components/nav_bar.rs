//! Site header with brand, mobile toggle, and in-page nav links.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::{scroll, viewport};

/// Top navigation bar.
///
/// `NavState` is the ground truth for the menu; the `aria-expanded`
/// attribute and the link list's display style are derived from it on every
/// render, never read back from the DOM.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let on_toggle = move |_| nav.update(NavState::toggle);

    view! {
        <header class="site-header">
            <nav class="nav">
                <a class="nav__brand" href="#top" on:click=move |ev| scroll::anchor_click(&ev, "#top")>
                    "Alex Doe"
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if nav.get().expanded { "true" } else { "false" }
                    on:click=on_toggle
                >
                    "\u{2630}"
                </button>
                <div
                    class="nav-links"
                    style:display=move || if nav.get().expanded { "flex" } else { "" }
                >
                    <NavLink nav=nav href="#about" label="About"/>
                    <NavLink nav=nav href="#skills" label="Skills"/>
                    <NavLink nav=nav href="#projects" label="Projects"/>
                    <NavLink nav=nav href="#contact" label="Contact"/>
                </div>
            </nav>
        </header>
    }
}

/// One in-page nav link: smooth-scrolls to its section and closes the menu
/// on narrow viewports.
#[component]
fn NavLink(nav: RwSignal<NavState>, href: &'static str, label: &'static str) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        scroll::anchor_click(&ev, href);
        nav.update(|n| n.link_clicked(viewport::viewport_is_narrow()));
    };

    view! {
        <a href=href on:click=on_click>
            {label}
        </a>
    }
}
