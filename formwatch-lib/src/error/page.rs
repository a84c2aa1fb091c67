//! Page dispatch errors

/// Error type for events that reference page parts that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Unknown tab '{0}'")]
    UnknownTab(String),

    #[error("FAQ item {index} out of range (page has {len})")]
    FaqOutOfRange { index: usize, len: usize },
}
