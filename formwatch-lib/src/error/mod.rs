//! Error types
//!
//! A failing validation rule is not an error; it surfaces as a visible
//! indicator. These types cover the edges: event scripts, page lookups and
//! configuration files.

mod config;
mod event;
mod page;

pub use config::*;
pub use event::*;
pub use page::*;
