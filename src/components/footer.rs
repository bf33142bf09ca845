//! Page footer with the current year.

use leptos::prelude::*;

/// Current year from the host clock; `None` outside a browser.
fn current_year() -> Option<u32> {
    #[cfg(target_arch = "wasm32")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year().map_or_else(String::new, |y| y.to_string());

    view! {
        <footer class="site-footer">
            <p>
                "\u{00a9} " <span id="year">{year}</span> " Alex Doe. Built with Rust and Leptos."
            </p>
        </footer>
    }
}
