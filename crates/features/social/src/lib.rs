//! Social link list slice: the fixed set of network links shown in page footers.

#[cfg(feature = "client")]
mod client;
mod links;

#[cfg(feature = "client")]
pub use client::Socials;
pub use links::{Platform, SOCIAL_LINKS, SocialLink, links};
