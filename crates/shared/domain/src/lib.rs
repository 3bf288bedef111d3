//! # Domain Models
//!
//! Plain data shared by every slice: client configuration, navigation routes and the
//! fixed strings of the registration contract. No I/O and no behaviour beyond small helpers.

pub mod config;
pub mod constants;
pub mod route;
