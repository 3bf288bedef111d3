//! The registration form controller.

use crate::api::AuthApi;
use crate::domain::{
    ErrorKey, Field, FieldErrors, MaskedField, PasswordRequirements, RegisterRequest,
    RegistrationForm, RegistrationReply,
};
use parking_lot::Mutex;
use portal_domain::constants::{GENERIC_FAILURE, PASSWORDS_DO_NOT_MATCH};
use portal_domain::route::Route;
use portal_kernel::debounce::Debouncer;
use portal_kernel::navigation::Navigator;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

/// Everything a registration view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub requirements: PasswordRequirements,
    /// Result of the last debounced comparison. Display only; `submit` re-checks.
    pub passwords_match: bool,
    pub errors: FieldErrors,
    pub loading: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    /// Set on first focus of the password input; the checklist stays visible afterwards.
    pub password_focused: bool,
    /// Completed match comparisons.
    pub match_checks: u64,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            form: RegistrationForm::default(),
            requirements: PasswordRequirements::evaluate(""),
            passwords_match: true,
            errors: FieldErrors::default(),
            loading: false,
            show_password: false,
            show_confirm_password: false,
            password_focused: false,
            match_checks: 0,
        }
    }
}

impl RegistrationState {
    #[must_use]
    pub const fn is_visible(&self, field: MaskedField) -> bool {
        match field {
            MaskedField::Password => self.show_password,
            MaskedField::ConfirmPassword => self.show_confirm_password,
        }
    }

    /// The inline mismatch hint is only shown once something was typed into the confirmation.
    #[must_use]
    pub fn shows_mismatch(&self) -> bool {
        !self.passwords_match && !self.form.confirm_password.is_empty()
    }
}

/// How a call to [`RegistrationSession::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// Accepted by the server; the form was reset and the login view requested.
    Registered,
    /// Password and confirmation differ; nothing was sent.
    Mismatch,
    /// The server refused the registration; messages are in the state's errors.
    Rejected,
    /// The call failed in transport or returned an unusable reply.
    Failed,
    /// Another submission was still in flight.
    AlreadySubmitting,
}

/// One live registration form.
///
/// State is published through a watch channel so any number of views can follow it.
/// The session owns the pending password-match check; dropping it cancels the check.
pub struct RegistrationSession<A, N> {
    api: A,
    navigator: N,
    state: Arc<watch::Sender<RegistrationState>>,
    match_check: Mutex<Debouncer>,
}

impl<A, N> fmt::Debug for RegistrationSession<A, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationSession")
            .field("state", &*self.state.borrow())
            .field("match_check", &*self.match_check.lock())
            .finish_non_exhaustive()
    }
}

impl<A: AuthApi, N: Navigator> RegistrationSession<A, N> {
    /// `match_delay` is the idle time after the last password edit before the two password
    /// fields are compared.
    pub fn new(api: A, navigator: N, match_delay: Duration) -> Self {
        Self {
            api,
            navigator,
            state: Arc::new(watch::Sender::new(RegistrationState::default())),
            match_check: Mutex::new(Debouncer::new(match_delay)),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.state.subscribe()
    }

    /// Records a keystroke.
    ///
    /// Password edits refresh the checklist right away; edits to either password field
    /// re-arm the delayed match check.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if field == Field::Password {
                state.requirements = PasswordRequirements::evaluate(&value);
            }
            state.form.set(field, value);
        });

        if field.is_password() {
            self.schedule_match_check();
        }
    }

    pub fn focus_password(&self) {
        self.state.send_if_modified(|state| !std::mem::replace(&mut state.password_focused, true));
    }

    pub fn toggle_visibility(&self, field: MaskedField) {
        self.state.send_modify(|state| {
            let flag = match field {
                MaskedField::Password => &mut state.show_password,
                MaskedField::ConfirmPassword => &mut state.show_confirm_password,
            };
            *flag = !*flag;
        });
    }

    /// Validates locally, then sends the registration.
    ///
    /// Errors from the previous attempt are cleared first; `loading` is set for the duration
    /// of the call and cleared on every path, including when the future is dropped mid-call.
    #[instrument(level = "debug", skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let started = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            state.errors = FieldErrors::default();
            true
        });
        if !started {
            debug!("Submission already in flight");
            return SubmitOutcome::AlreadySubmitting;
        }
        let _loading = LoadingGuard(&self.state);

        let form = self.state.borrow().form.clone();
        if !form.passwords_match() {
            self.finish(FieldErrors::single(ErrorKey::Password, PASSWORDS_DO_NOT_MATCH));
            return SubmitOutcome::Mismatch;
        }

        match self.api.register(&RegisterRequest::from(&form)).await {
            Ok(RegistrationReply::Accepted) => {
                info!(username = %form.username, "Registration accepted");
                self.match_check.lock().cancel();
                self.state.send_replace(RegistrationState::default());
                self.navigator.navigate(Route::Login);
                SubmitOutcome::Registered
            },
            Ok(RegistrationReply::Rejected(messages)) => {
                info!(count = messages.len(), "Registration rejected by server");
                self.finish(FieldErrors::from_server_messages(messages));
                SubmitOutcome::Rejected
            },
            Err(err) => {
                error!(error = %err, "Error submitting registration");
                self.finish(FieldErrors::single(ErrorKey::General, GENERIC_FAILURE));
                SubmitOutcome::Failed
            },
        }
    }

    fn finish(&self, errors: FieldErrors) {
        self.state.send_modify(|state| {
            state.errors = errors;
            state.loading = false;
        });
    }

    fn schedule_match_check(&self) {
        let state = Arc::clone(&self.state);
        self.match_check.lock().schedule(move || {
            state.send_modify(|state| {
                state.passwords_match = state.form.passwords_match();
                state.match_checks += 1;
            });
        });
    }
}

/// Clears `loading` when a submission ends without reaching `finish`.
struct LoadingGuard<'a>(&'a watch::Sender<RegistrationState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| std::mem::replace(&mut state.loading, false));
    }
}
