/// Registration endpoint, relative to the configured API base URL.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Shown under the password field when the two password fields differ at submit time.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Shown under the submit control for transport or decoding failures.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again later.";

/// Characters that satisfy the special-character password rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Idle time before the password-match hint is re-evaluated.
pub const MATCH_DEBOUNCE_MS: u64 = 300;
