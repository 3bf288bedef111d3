//! The registration call, as seen by the form controller.

use crate::domain::{RegisterRequest, RegisterResponse, RegistrationReply};
use crate::error::{AuthError, AuthErrorExt};
use portal_domain::constants::REGISTER_ENDPOINT;
use portal_kernel::http::ApiClient;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Backend operations the registration form depends on.
pub trait AuthApi {
    /// Submits a registration attempt.
    ///
    /// A server-side validation failure is `Ok(RegistrationReply::Rejected(..))`; `Err` is
    /// reserved for transport problems and replies that break the contract.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<RegistrationReply, AuthError>> + Send;
}

impl AuthApi for ApiClient {
    #[instrument(level = "debug", skip_all, fields(username = %request.username))]
    async fn register(&self, request: &RegisterRequest) -> Result<RegistrationReply, AuthError> {
        let response: RegisterResponse = self
            .post_json(REGISTER_ENDPOINT, request)
            .await
            .context("Registration request failed")?;

        debug!(success = response.success, "Registration reply decoded");
        response.try_into()
    }
}

impl<A: AuthApi + Send + Sync + ?Sized> AuthApi for Arc<A> {
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<RegistrationReply, AuthError>> + Send {
        (**self).register(request)
    }
}
