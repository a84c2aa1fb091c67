//! Host adapters.
//!
//! Widgets never touch a document directly. They hold a [`Host`] handle and
//! push element writes through it; the host decides what an element id maps
//! to. [`MemoryHost`] keeps everything in a table for tests and the CLI.

mod memory;

pub use memory::{ElementState, MemoryHost};

/// Write side of the hosting environment.
///
/// Methods take `&self` so one host can be cloned into every widget on the
/// page. Writes to unknown ids are the host's business; widgets never fail
/// on them.
pub trait Host {
    /// Shows or hides an element.
    fn set_visible(&self, id: &str, visible: bool);

    /// Replaces the value of an input element.
    fn set_value(&self, id: &str, value: &str);

    /// Replaces the text content of an element.
    fn set_text(&self, id: &str, text: &str);

    /// Adds (`enabled`) or removes a class on an element.
    fn set_class(&self, id: &str, class: &str, enabled: bool);

    /// Sets the text color, or restores the inherited color with `None`.
    fn set_color(&self, id: &str, color: Option<&str>);
}
