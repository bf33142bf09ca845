//! Page components.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod project_card;
pub mod projects_section;
pub mod skills;
