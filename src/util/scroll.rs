//! Smooth scrolling for in-page anchor links.

/// Handle a click on an anchor whose `href` is an in-page fragment.
///
/// When an element with the fragment's id exists, the default jump is
/// suppressed and the element is scrolled smoothly to the top of the
/// viewport. When it does not, the click falls through to default browser
/// navigation, silently.
pub fn anchor_click(ev: &leptos::ev::MouseEvent, href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(target) = document.get_element_by_id(id) else {
            return;
        };

        ev.prevent_default();

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ev, href);
    }
}
