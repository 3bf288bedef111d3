pub mod register;
pub mod socials;
