//! Event script parsing errors

/// Error type for turning a script line into a page event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("Empty event line")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// The command needs an argument that was not given.
    #[error("Command '{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

impl EventParseError {
    /// Creates a new missing argument error.
    pub fn missing(command: &'static str, expected: &'static str) -> Self {
        Self::MissingArgument { command, expected }
    }
}
