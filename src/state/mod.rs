//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each UI behavior owns an explicit state value here and synchronizes the
//! DOM from it as a render side effect. Nothing reads state back out of DOM
//! attributes, so every transition is testable without a document.

pub mod contact;
pub mod nav;
pub mod projects;
