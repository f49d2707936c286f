//! In-process services backing the HTTP handlers.

pub mod sessions;
pub mod settings;
