//! Credential provider implementations.
//!
//! `BuildTimeProvider` serves the values compiled in by `build.rs`;
//! `ConstProvider` serves values given in code (tests, bring-up boards).

pub mod buildtime;
pub mod const_provider;

pub use buildtime::BuildTimeProvider;
pub use const_provider::ConstProvider;

use crate::credentials::WifiCredentials;

/// Source of network credentials for the networking stack.
///
/// Implement this for storage the application owns; the crate only ships
/// compile-time providers.
pub trait CredentialProvider {
    /// Provider-specific error type
    type Error;

    /// Load and validate the credential pair.
    fn credentials(&self) -> Result<WifiCredentials, Self::Error>;
}
