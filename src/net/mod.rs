//! Network IO for the contact form.

pub mod mail;
