//! # wifi-creds
//!
//! Build-time Wi-Fi credentials for embedded firmware, kept out of version control.
//!
//! **Key features:**
//! - **Two constants** - [`WIFI_SSID`] and [`WIFI_PASS`] live in flash, ready before any networking code runs
//! - **Git-ignored source** - values come from `WIFI_SSID`/`WIFI_PASS` or a local `wifi_creds.toml`
//! - **Checked-in template** - `wifi_creds.example.toml` carries placeholders only
//! - **Validated at build time** - empty or over-long values fail the build
//! - **Redacted types** - [`Passphrase`] never prints its value
//!
//! ```rust,ignore
//! control.join(wifi_creds::WIFI_SSID, JoinOptions::new(wifi_creds::WIFI_PASS.as_bytes())).await;
//! ```
//!
//! ## Optional Features
//!
//! - `defmt` - `defmt::Format` for all public types (passphrase redacted)
//! - `credgen` - `wifi-credgen` generator for downstream build scripts (std)
//! - `require-credentials` - refuse to build from the example template
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;
extern crate subtle;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod policy;

pub mod error;

pub mod credentials;

pub mod providers;

// ============================================================================
// Re-exports - Public API
// ============================================================================

pub use credentials::{Passphrase, Ssid, WifiCredentials};
pub use error::CredentialError;
pub use policy::{Origin, Violation};
pub use providers::{BuildTimeProvider, ConstProvider, CredentialProvider};

// ============================================================================
// Build-time Credentials
// ============================================================================

// Defines WIFI_SSID, WIFI_PASS and ORIGIN.
include!(concat!(env!("OUT_DIR"), "/wifi_creds.rs"));

/// Credentials compiled into this build, as validated owned values.
pub fn credentials() -> Result<WifiCredentials, CredentialError> {
    BuildTimeProvider::new().credentials()
}

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_non_empty() {
        assert!(!WIFI_SSID.is_empty());
        assert!(!WIFI_PASS.is_empty());
    }

    #[test]
    fn test_constants_pass_policy() {
        assert_eq!(policy::check(WIFI_SSID, WIFI_PASS), Ok(()));
    }

    #[test]
    fn test_credentials_from_build() {
        let creds = credentials().unwrap();
        assert_eq!(creds.ssid().as_str(), WIFI_SSID);
        assert_eq!(creds.origin(), ORIGIN);
        assert_ne!(ORIGIN, Origin::Runtime);
    }
}
