//! HTTP route handlers

pub mod games;
pub mod grade;
pub mod sessions;
pub mod settings;
pub mod topics;
pub mod words;
