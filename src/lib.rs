//! # portfolio-ui
//!
//! Leptos + WASM frontend for a personal portfolio site. Replaces the
//! hand-written DOM-scripting layer with a Rust-native UI: mobile nav
//! toggle, project card grid, one-shot scroll reveal, smooth in-page
//! scrolling, and a contact form with optional mail delivery.
//!
//! Browser-only work lives behind `cfg(target_arch = "wasm32")`; everything
//! with behavior worth testing is plain Rust that runs on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
