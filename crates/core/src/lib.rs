//! Core types and rules for linksaver
//!
//! Domain types shared across all other crates, plus the pure pieces of the
//! bookmark lifecycle: input validation, tag normalization, list filtering and
//! position planning.

mod bookmark;
mod constants;
mod env_config;
mod error;
mod link;
mod ordering;
mod query;
mod tags;

pub use bookmark::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use link::*;
pub use ordering::*;
pub use query::*;
pub use tags::*;
