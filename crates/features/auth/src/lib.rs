//! Registration feature slice.
//!
//! [`RegistrationSession`] is the form controller: it tracks the four inputs, keeps the
//! password checklist current, compares the two passwords once typing pauses and submits the
//! form through an [`AuthApi`]. Views (the Dioxus form under the `client` feature, the
//! terminal front-end) only forward input events and render [`RegistrationState`].
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use portal_auth::{Field, RegistrationSession, SubmitOutcome};
//! use portal_kernel::prelude::*;
//!
//! struct Stay;
//! impl Navigator for Stay {
//!     fn navigate(&self, _route: Route) {}
//! }
//!
//! let api = ApiClient::builder().base_url("http://localhost:4583").build()?;
//! let session = RegistrationSession::new(api, Stay, std::time::Duration::from_millis(300));
//! session.set_field(Field::Username, "ana");
//! session.set_field(Field::Email, "ana@example.com");
//! session.set_field(Field::Password, "Secret#123");
//! session.set_field(Field::ConfirmPassword, "Secret#123");
//! assert_eq!(session.submit().await, SubmitOutcome::Registered);
//! # Ok(())
//! # }
//! ```

mod api;
#[cfg(feature = "client")]
mod client;
mod domain;
mod error;
mod session;

pub use api::AuthApi;
#[cfg(feature = "client")]
pub use client::{RegisterForm, RouterNavigator};
pub use domain::{
    ErrorKey, Field, FieldErrors, MaskedField, PasswordRequirements, RegisterRequest,
    RegisterResponse, RegistrationForm, RegistrationReply, Requirement,
};
pub use error::{AuthError, AuthErrorExt};
pub use session::{RegistrationSession, RegistrationState, SubmitOutcome};
