use std::time::Duration;

use crate::config::FormConfig;
use crate::deferred::DeferredQueue;
use crate::host::Host;

use super::result::{FieldError, SubmitOutcome};
use super::rules;
use super::{Field, FieldValues};

/// Form-level state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A valid submit happened and its reset has not fired yet.
    SuccessPending,
}

/// Deferred work queued by an accepted submit.
#[derive(Debug)]
struct ResetForm;

/// Validates the four signup fields and gates submission.
///
/// Field values and indicator visibility are owned here; the host only
/// receives writes. Every handler recomputes the rules it is responsible
/// for from the stored values, so indicators always reflect the last
/// evaluation.
///
/// An accepted submit queues a reset on a virtual clock driven by
/// [`advance`](Self::advance). The reset is never cancelled: edits made
/// while it is pending are wiped when it fires.
#[derive(Debug)]
pub struct FormValidator<H> {
    host: H,
    config: FormConfig,
    values: FieldValues,
    errors: [bool; 4],
    success: bool,
    resets: DeferredQueue<ResetForm>,
}

impl<H: Host> FormValidator<H> {
    /// Creates a validator and hides every indicator it owns.
    pub fn new(host: H, config: FormConfig) -> Self {
        let validator = Self {
            host,
            config,
            values: FieldValues::new(),
            errors: [false; 4],
            success: false,
            resets: DeferredQueue::new(),
        };
        for field in Field::ALL {
            validator.host.set_visible(validator.config.ids.error(field), false);
        }
        validator.host.set_visible(&validator.config.ids.success, false);
        validator
    }

    /// Handles a value change on `field`.
    ///
    /// A password change also re-checks the confirmation, but only while the
    /// confirmation holds text. `Field::ConfirmPassword` is forwarded to
    /// [`on_confirm_password_changed`](Self::on_confirm_password_changed).
    pub fn on_field_changed(&mut self, field: Field, value: impl Into<String>) {
        if field == Field::ConfirmPassword {
            self.on_confirm_password_changed(value);
            return;
        }

        let value = value.into();
        if field.is_secret() {
            log::trace!("{} changed ({} chars)", field, value.chars().count());
        } else {
            log::trace!("{} changed to {:?}", field, value);
        }
        self.values.set(field, value);
        self.evaluate(field);

        if field == Field::Password && !self.values.get(Field::ConfirmPassword).is_empty() {
            self.evaluate(Field::ConfirmPassword);
        }
    }

    /// Handles a value change on the confirmation field.
    ///
    /// Runs unconditionally, so clearing the confirmation while a password is
    /// set shows the mismatch.
    pub fn on_confirm_password_changed(&mut self, value: impl Into<String>) {
        let value = value.into();
        log::trace!(
            "{} changed ({} chars)",
            Field::ConfirmPassword,
            value.chars().count()
        );
        self.values.set(Field::ConfirmPassword, value);
        self.evaluate(Field::ConfirmPassword);
    }

    /// Handles a submit request.
    ///
    /// Re-checks all four fields from their stored values and sets every
    /// error indicator to match. When all pass, shows the success indicator
    /// and queues the reset.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter(|&field| !self.evaluate(field))
            .map(FieldError::new)
            .collect();

        if !errors.is_empty() {
            log::debug!(
                "submit rejected: {}",
                errors
                    .iter()
                    .map(|e| e.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return SubmitOutcome::Rejected(errors);
        }

        self.success = true;
        self.host.set_visible(&self.config.ids.success, true);
        self.resets.schedule(self.config.reset_delay, ResetForm);
        log::debug!(
            "submit accepted, reset in {:?} ({} pending)",
            self.config.reset_delay,
            self.resets.len()
        );
        SubmitOutcome::Accepted
    }

    /// Advances the virtual clock and runs every reset that became due.
    ///
    /// Returns the number of resets that fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.resets.advance(elapsed).len();
        for _ in 0..fired {
            self.reset();
        }
        fired
    }

    /// Clears the inputs and hides the success indicator. Error indicators
    /// are left as they are.
    fn reset(&mut self) {
        self.values.clear();
        for field in Field::ALL {
            self.host.set_value(self.config.ids.input(field), "");
        }
        self.success = false;
        self.host.set_visible(&self.config.ids.success, false);
        log::debug!("form reset");
    }

    /// Applies the rule for `field` and writes its indicator.
    fn evaluate(&mut self, field: Field) -> bool {
        let passed = rules::check(field, &self.values);
        self.errors[field.index()] = !passed;
        self.host.set_visible(self.config.ids.error(field), !passed);
        passed
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error_visible(&self, field: Field) -> bool {
        self.errors[field.index()]
    }

    pub fn success_visible(&self) -> bool {
        self.success
    }

    pub fn phase(&self) -> FormPhase {
        if self.success {
            FormPhase::SuccessPending
        } else {
            FormPhase::Editing
        }
    }

    /// Number of queued resets.
    pub fn pending_resets(&self) -> usize {
        self.resets.len()
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
