//! Viewport breakpoint predicate.
//!
//! Components take narrowness as a value from `viewport_is_narrow()` instead
//! of reading `window.innerWidth` inline, so the decision logic is testable
//! without a browser.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Width below which the nav collapses behind the toggle button.
pub const NAV_BREAKPOINT_PX: f64 = 680.0;

/// Whether a viewport of `width_px` is narrow enough for mobile nav behavior.
pub fn is_narrow(width_px: f64) -> bool {
    width_px < NAV_BREAKPOINT_PX
}

/// Narrowness of the live viewport. `false` outside a browser.
pub fn viewport_is_narrow() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .is_some_and(is_narrow)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
