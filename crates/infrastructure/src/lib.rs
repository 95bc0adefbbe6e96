//! stubdns Infrastructure Layer
//!
//! Socket transport and the single-exchange resolver built on the domain codec.
pub mod dns;
