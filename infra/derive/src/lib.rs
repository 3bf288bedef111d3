#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace.
//!
//! * [`portal_error`] turns a plain enum into a context-aware error type.
//! * [`api_model`] stamps the serde policy used for wire DTOs exchanged with the API.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! the integration tests under `tests/` exercise them from a consumer's point of view.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for wire models exchanged with the HTTP API.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (override with `rename_all = "..."`).
///     * `deny_unknown_fields` by default (disable with `deny_unknown_fields = false`).
///
/// An explicit `#[serde(rename_all = ...)]` that disagrees with the macro argument is a
/// compile error, as is disabling `deny_unknown_fields` while serde already sets it.
///
/// # Example
///
/// ```rust,ignore
/// use portal_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct RegisterResponse {
///     pub success: bool,
///     pub message: Option<Vec<String>>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand(attr.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: generates a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field tagged
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Formatting helper**: a private `format_context` function for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted, and every variant must use named fields.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[portal_derive::portal_error]
/// pub enum HttpError {
///     #[error("Request failed{}: {source}", format_context(.context))]
///     Request { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal HTTP error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn send() -> Result<(), HttpError> {
///     do_request().context("Posting registration")?;
///     Err("unreachable".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn portal_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
