//! Debounced login form validator and submit gate.
//!
//! Every field transition recomputes that field's validity immediately, but
//! the aggregate `form_is_valid` flag only follows after the inputs have been
//! quiet for [`FormConfig::debounce`]. Until the first evaluation fires the
//! flag is `false`, so the submit control starts out disabled.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::{FormError, SubmitError};
use crate::state::State;
use crate::task::Debouncer;
use crate::validation::{FieldAction, FieldId, FieldState};
use crate::wakeup::WakeupSender;

/// Default quiet period before the aggregate validity is recomputed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Form tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Quiet period after the last field change before `form_is_valid`
    /// is recomputed.
    pub debounce: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Snapshot of the form's validity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    pub email_is_valid: bool,
    pub password_is_valid: bool,
    pub form_is_valid: bool,
}

/// Receives the raw credentials of an accepted submission.
///
/// Return values and failures are the receiver's business; the form only
/// guarantees one call per accepted submission.
pub trait AuthCallback {
    fn login(&mut self, email: &str, password: &str);
}

impl<F> AuthCallback for F
where
    F: FnMut(&str, &str),
{
    fn login(&mut self, email: &str, password: &str) {
        self(email, password)
    }
}

/// Email + password form with a debounced aggregate validity flag.
///
/// Each instance owns its field states and its single pending evaluation.
/// Dropping the form (or calling [`teardown`](Self::teardown)) cancels a
/// pending evaluation so it never lands after the form is gone.
#[derive(Debug)]
pub struct FormValidator {
    config: FormConfig,
    email: FieldState,
    password: FieldState,
    form_is_valid: State<bool>,
    evaluations: Arc<AtomicU64>,
    debouncer: Debouncer,
    wakeup: Option<WakeupSender>,
}

impl FormValidator {
    /// Create an empty form bound to the current tokio runtime.
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        Ok(Self {
            config,
            email: FieldState::default(),
            password: FieldState::default(),
            form_is_valid: State::new(false),
            evaluations: Arc::new(AtomicU64::new(0)),
            debouncer: Debouncer::new()?,
            wakeup: None,
        })
    }

    /// Signal `wakeup` every time a debounced evaluation lands.
    pub fn with_wakeup(mut self, wakeup: WakeupSender) -> Self {
        self.wakeup = Some(wakeup);
        self
    }

    pub fn config(&self) -> FormConfig {
        self.config
    }

    pub fn email(&self) -> &FieldState {
        &self.email
    }

    pub fn password(&self) -> &FieldState {
        &self.password
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    /// Apply `action` to one field and restart the quiet period.
    pub fn dispatch(&mut self, id: FieldId, action: FieldAction) {
        let field = match id {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        };
        *field = field.reduce(id.kind(), action);
        debug!("{:?} field is_valid={}", id, field.is_valid());
        self.schedule_evaluation();
    }

    /// Keystroke: replace the field's raw value.
    pub fn change(&mut self, id: FieldId, value: impl Into<String>) {
        self.dispatch(id, FieldAction::Change(value.into()));
    }

    /// Focus left the field.
    pub fn blur(&mut self, id: FieldId) {
        self.dispatch(id, FieldAction::Blur);
    }

    fn schedule_evaluation(&mut self) {
        // Captured now, applied when the quiet period ends.
        let email_is_valid = self.email.is_valid();
        let password_is_valid = self.password.is_valid();
        let form_is_valid = self.form_is_valid.clone();
        let evaluations = Arc::clone(&self.evaluations);
        let wakeup = self.wakeup.clone();

        // The closure never awaits, so a cancel either prevents it entirely
        // or lands after it has fully applied.
        self.debouncer.schedule(self.config.debounce, move || {
            let valid = email_is_valid && password_is_valid;
            form_is_valid.set(valid);
            evaluations.fetch_add(1, Ordering::SeqCst);
            debug!(
                "Form evaluated: email={} password={} form_is_valid={}",
                email_is_valid, password_is_valid, valid
            );
            if let Some(wakeup) = wakeup {
                wakeup.send();
            }
        });
    }

    pub fn form_is_valid(&self) -> bool {
        self.form_is_valid.get()
    }

    /// Whether the submit control should be enabled.
    pub fn submit_enabled(&self) -> bool {
        self.form_is_valid()
    }

    pub fn state(&self) -> FormState {
        FormState {
            email_is_valid: self.email.is_valid(),
            password_is_valid: self.password.is_valid(),
            form_is_valid: self.form_is_valid(),
        }
    }

    /// Number of debounced evaluations that have actually run.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::SeqCst)
    }

    /// Whether an evaluation is waiting for the quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Hand the raw field values to `auth` if the form is currently valid.
    ///
    /// Submitting does not reset or reschedule anything.
    pub fn submit(&self, auth: &mut impl AuthCallback) -> Result<(), SubmitError> {
        if !self.submit_enabled() {
            warn!("Submit rejected: form is not valid");
            return Err(SubmitError::Disabled);
        }
        info!("Submitting login for {}", self.email.value());
        auth.login(self.email.value(), self.password.value());
        Ok(())
    }

    /// Unmount the form, cancelling a pending evaluation.
    pub fn teardown(mut self) {
        if self.debouncer.is_pending() {
            debug!("Form torn down with a pending evaluation");
        }
        self.debouncer.cancel();
    }
}
