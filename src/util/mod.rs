//! Browser glue: viewport predicate, smooth scrolling, scroll reveal.

pub mod reveal;
pub mod scroll;
pub mod viewport;
