use portal_kernel::http::HttpError;
use std::borrow::Cow;

/// A specialized [`AuthError`] enum of this crate.
#[portal_derive::portal_error]
pub enum AuthError {
    /// The registration call did not produce a usable reply.
    #[error("Auth transport error{}: {source}", format_context(.context))]
    Transport { source: HttpError, context: Option<Cow<'static, str>> },

    /// The reply decoded but breaks the registration contract.
    #[error("Auth protocol error{}: {message}", format_context(.context))]
    Protocol { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal auth error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
