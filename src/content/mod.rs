//! Built-in remembrance content: the catalog, Arabic-aware search and the
//! sample data served while storage is unavailable.

pub mod catalog;
pub mod mock;
pub mod normalize;
pub mod search;
mod seed;

pub use seed::{SeedSummary, seed};
