//! Host-agnostic model of an interactive demo page
//!
//! The centerpiece is [`FormValidator`](validation::FormValidator): four
//! regex-backed field checks, a submit gate and a deferred post-success reset.
//! The remaining page widgets (theme toggle, event feedback, counter, FAQ,
//! tabs) live in [`page`]. Every widget writes through a [`Host`](host::Host)
//! adapter so it can be driven without a rendering environment.

pub mod config;
pub mod deferred;
pub mod error;
pub mod host;
pub mod page;
pub mod validation;

pub use config::{FormConfig, FormIds, PageConfig};
pub use host::{Host, MemoryHost};
pub use page::{DemoPage, Dispatch, PageEvent};
pub use validation::{Field, FormPhase, FormValidator, SubmitOutcome};
