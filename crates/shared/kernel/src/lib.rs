//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the API transport and the small
//! client-side primitives (navigation seam, debouncing) that form controllers build on.
//!
//! ## Calling the API
//! ```rust,no_run
//! # async fn demo() -> Result<(), portal_kernel::http::HttpError> {
//! use portal_kernel::http::ApiClient;
//!
//! let api = ApiClient::builder().base_url("http://localhost:4583").build()?;
//! let reply: serde_json::Value = api.post_json("/api/ping", &serde_json::json!({})).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod debounce;
pub mod http;
pub mod navigation;
pub mod prelude;

pub use portal_domain as domain;
