use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `PORTAL__API__BASE_URL`.
pub const ENV_PREFIX: &str = "PORTAL";
/// File stem used when no explicit path is given.
pub const DEFAULT_CONFIG: &str = "client";

#[portal_derive::portal_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration document and overlays environment variables.
///
/// Layers, last one wins:
/// 1. **File**: `path`, or `client` in the working directory. The extension may be omitted;
///    any format supported by the `config` crate (TOML, JSON, YAML...) is accepted.
/// 2. **Environment**: variables prefixed with `PORTAL__`, with `__` separating nested keys
///    (`PORTAL__FORM__MATCH_DEBOUNCE_MS` maps to `form.match_debounce_ms`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing, unreadable, or does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use portal_kernel::config::load_config;
/// use portal_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/client")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// Same as [`load_config`] with a caller-supplied environment layer.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// The `PORTAL__`-prefixed environment layer used by [`load_config`].
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").try_parsing(true)
}
