//! Registration data: form fields, password rules, error buckets and the wire contract.

use crate::error::AuthError;
use portal_domain::constants::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, SPECIAL_CHARACTERS};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Editable inputs of the registration form.
///
/// The string form (`username`, `email`, `password`, `confirmPassword`) is the input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Edits to these fields re-arm the password-match check.
    #[must_use]
    pub const fn is_password(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Inputs rendered masked by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum MaskedField {
    Password,
    ConfirmPassword,
}

impl From<MaskedField> for Field {
    fn from(masked: MaskedField) -> Self {
        match masked {
            MaskedField::Password => Self::Password,
            MaskedField::ConfirmPassword => Self::ConfirmPassword,
        }
    }
}

/// Current contents of the four inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// One line of the password checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
}

impl Requirement {
    /// Checklist copy shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinLength => "Cel puțin 8 caractere.",
            Self::Uppercase => "Cel puțin o literă majusculă.",
            Self::Lowercase => "Cel puțin o literă mică.",
            Self::Digit => "Cel puțin o cifră.",
            Self::SpecialChar => "Cel puțin un caracter special (de exemplu, !@#$%^&*).",
        }
    }
}

/// Advisory password rules, derived from the password alone.
///
/// Length counts Unicode scalar values; the letter and digit classes are ASCII only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
}

impl PasswordRequirements {
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let length = password.chars().count();
        Self {
            min_length: (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length),
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    #[must_use]
    pub const fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::MinLength => self.min_length,
            Requirement::Uppercase => self.has_uppercase,
            Requirement::Lowercase => self.has_lowercase,
            Requirement::Digit => self.has_digit,
            Requirement::SpecialChar => self.has_special_char,
        }
    }

    #[must_use]
    pub fn all_met(&self) -> bool {
        Requirement::iter().all(|r| self.is_met(r))
    }

    /// Rules in display order, paired with their status.
    pub fn checklist(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::iter().map(|r| (r, self.is_met(r)))
    }
}

/// Where an error message is displayed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKey {
    Username,
    Email,
    Password,
    General,
}

impl ErrorKey {
    /// Buckets a server message by keyword; anything unrecognised lands on `Password`.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("username") {
            Self::Username
        } else if lowered.contains("email") {
            Self::Email
        } else {
            Self::Password
        }
    }
}

/// Error messages per display slot, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ErrorKey, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn single(key: ErrorKey, message: impl Into<String>) -> Self {
        Self(BTreeMap::from([(key, vec![message.into()])]))
    }

    /// Groups server-reported messages with [`ErrorKey::classify`].
    #[must_use]
    pub fn from_server_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: BTreeMap<ErrorKey, Vec<String>> = BTreeMap::new();
        for message in messages {
            let message = message.into();
            buckets.entry(ErrorKey::classify(&message)).or_default().push(message);
        }
        Self(buckets)
    }

    #[must_use]
    pub fn get(&self, key: ErrorKey) -> &[String] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The message a view shows for `key`.
    #[must_use]
    pub fn first(&self, key: ErrorKey) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &[String])> {
        self.0.iter().map(|(key, messages)| (*key, messages.as_slice()))
    }
}

/// Body of `POST /api/auth/register`.
#[portal_derive::api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<&RegistrationForm> for RegisterRequest {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            confirm_password: form.confirm_password.clone(),
        }
    }
}

/// Reply of the registration endpoint. Only `success` is meaningful on success.
#[portal_derive::api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<Vec<String>>,
}

/// What the server decided about a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationReply {
    Accepted,
    Rejected(Vec<String>),
}

impl TryFrom<RegisterResponse> for RegistrationReply {
    type Error = AuthError;

    fn try_from(response: RegisterResponse) -> Result<Self, Self::Error> {
        match response {
            RegisterResponse { success: true, .. } => Ok(Self::Accepted),
            RegisterResponse { success: false, message: Some(messages) } => {
                Ok(Self::Rejected(messages))
            }
            RegisterResponse { success: false, message: None } => Err(AuthError::Protocol {
                message: "rejected registration carried no messages".into(),
                context: None,
            }),
        }
    }
}
