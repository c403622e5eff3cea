//! Identity provider integration.
//!
//! The marketplace delegates authentication to a third-party provider; this
//! module only calls the provider's client surface (behind a trait) and
//! mirrors the resulting user into observable local session state. The
//! provider's own wire protocol is out of scope.

pub mod domain;
pub mod errors;
pub mod provider;
pub mod service;
pub mod session;
