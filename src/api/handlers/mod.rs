//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod azkar;
pub mod dashboard;
pub mod health;
pub mod me;
pub mod tasbih;
