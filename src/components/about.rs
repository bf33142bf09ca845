//! About section.

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <h2>"About"</h2>
            <p>
                "I\u{2019}m a developer who enjoys taking ideas from sketch to shipped. "
                "Most of my work lives in the browser: interfaces, small tools, and "
                "the occasional API behind them."
            </p>
            <p>
                "When I\u{2019}m not writing code I\u{2019}m usually reading about type systems "
                "or tinkering with home automation."
            </p>
        </section>
    }
}
