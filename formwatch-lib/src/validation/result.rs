use super::Field;

/// A field whose rule failed at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            message: field.message(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the success indicator is up and a reset is queued.
    Accepted,
    /// One or more rules failed, in field order.
    Rejected(Vec<FieldError>),
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Failing fields, empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Whether the host's default navigation must be cancelled.
    ///
    /// Always true: accepted submits are handled in-page.
    pub fn default_prevented(&self) -> bool {
        true
    }
}
