use std::borrow::Cow;

/// Transport-level failures of the [`ApiClient`](super::ApiClient).
#[portal_derive::portal_error]
pub enum HttpError {
    /// The request could not be sent or the reply could not be read.
    #[error("HTTP request failed{}: {source}", format_context(.context))]
    Request { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The reply body was not the JSON document the caller expected.
    #[error("Malformed reply{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid API base URL{}: {message}", format_context(.context))]
    InvalidBaseUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
