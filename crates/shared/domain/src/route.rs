use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Views a form session can navigate to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    Register,
    Login,
}

impl Route {
    /// Path of the view inside the client router.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/",
            Self::Login => "/login",
        }
    }
}
