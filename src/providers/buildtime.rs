//! Build-time credential provider.
//!
//! Serves [`WIFI_SSID`](crate::WIFI_SSID) and [`WIFI_PASS`](crate::WIFI_PASS),
//! which `build.rs` resolved from the environment or a git-ignored file.
//!
//! # Example
//!
//! ```bash
//! export WIFI_SSID=HomeNet
//! export WIFI_PASS=secret123
//! cargo build --release
//! ```

use super::CredentialProvider;
use crate::credentials::WifiCredentials;
use crate::error::CredentialError;

/// Provider for the credentials compiled into this build.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuildTimeProvider;

impl BuildTimeProvider {
    /// Create a build-time provider.
    pub const fn new() -> Self {
        Self
    }
}

impl CredentialProvider for BuildTimeProvider {
    type Error = CredentialError;

    fn credentials(&self) -> Result<WifiCredentials, Self::Error> {
        WifiCredentials::new(crate::WIFI_SSID, crate::WIFI_PASS, crate::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_generated_constants() {
        let creds = BuildTimeProvider::new().credentials().unwrap();
        assert_eq!(creds.ssid().as_str(), crate::WIFI_SSID);
        assert_eq!(creds.passphrase().expose_secret(), crate::WIFI_PASS);
        assert_eq!(creds.origin(), crate::ORIGIN);
    }
}
