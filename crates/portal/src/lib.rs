//! Facade crate for the portal feature slices and shared modules.
//! Re-exports domain/kernel primitives and the slices so front-ends depend on one crate.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `portal` with the desired feature flags (`client` for the Dioxus views).
//! - Build an [`kernel::http::ApiClient`] from [`domain::config::ClientConfig`] and hand it
//!   to [`features::auth::RegistrationSession`] or provide it as view context.

pub use portal_domain as domain;
pub use portal_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use portal_auth as auth;
    pub use portal_social as social;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "auth",
        "social",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
