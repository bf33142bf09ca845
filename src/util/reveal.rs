//! One-shot scroll reveal.
//!
//! Every section, card, and skill group is tagged `reveal` and registered
//! with a single shared `IntersectionObserver`. The first time an element
//! crosses the visibility threshold it gains the `show` class and is
//! unobserved, so each element transitions exactly once and never re-hides.
//! The observer is page-wide and lives for the page's lifetime; there is no
//! teardown.

/// Elements that participate in the reveal animation.
pub const REVEAL_SELECTOR: &str = ".section, .card, .skill-category";
/// Class marking an element as reveal-managed (hidden until shown).
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the element has come into view.
pub const SHOWN_CLASS: &str = "show";
/// Fraction of the element that must be visible to trigger the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Tag all reveal targets and start watching them. Call once after the
/// initial render; a missing document or an empty match set is skipped.
#[cfg(target_arch = "wasm32")]
pub fn install() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(SHOWN_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        log::debug!("scroll reveal unavailable; leaving sections visible");
        return;
    };

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
            let _ = element.class_list().add_1(REVEAL_CLASS);
            observer.observe(&element);
        }
    }

    // The watcher is bounded by the page's lifetime; leak the callback
    // instead of tracking a handle nothing would ever drop.
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install() {}
