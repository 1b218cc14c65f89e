//! Constant credential provider with values given in code.
//!
//! **WARNING**: The values end up in the binary and in version control.
//! Use for tests and bench boards, never for a real network.

use super::CredentialProvider;
use crate::credentials::WifiCredentials;
use crate::error::CredentialError;
use crate::policy::Origin;

/// Constant credential provider.
///
/// Values are validated on every [`credentials`](CredentialProvider::credentials)
/// call, so a bad literal surfaces as an error rather than at compile time.
#[derive(Debug, Copy, Clone)]
pub struct ConstProvider {
    ssid: &'static str,
    passphrase: &'static str,
}

impl ConstProvider {
    /// Create a provider for the given pair.
    pub const fn new(ssid: &'static str, passphrase: &'static str) -> Self {
        Self { ssid, passphrase }
    }
}

impl CredentialProvider for ConstProvider {
    type Error = CredentialError;

    fn credentials(&self) -> Result<WifiCredentials, Self::Error> {
        WifiCredentials::new(self.ssid, self.passphrase, Origin::Runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Violation;

    static BENCH: ConstProvider = ConstProvider::new("bench-ap", "bench-pass-1");

    #[test]
    fn test_static_provider() {
        let creds = BENCH.credentials().unwrap();
        assert_eq!(creds.ssid().as_str(), "bench-ap");
        assert_eq!(creds.passphrase().expose_secret(), "bench-pass-1");
        assert_eq!(creds.origin(), Origin::Runtime);
        assert!(!creds.is_placeholder());
    }

    #[test]
    fn test_invalid_values_error() {
        let provider = ConstProvider::new("bench-ap", "");
        assert_eq!(
            provider.credentials(),
            Err(CredentialError::Invalid(Violation::EmptyPassphrase))
        );
    }

    #[test]
    fn test_generic_over_provider() {
        fn ssid_len<P: CredentialProvider>(provider: &P) -> Option<usize> {
            provider.credentials().ok().map(|c| c.ssid().as_str().len())
        }

        assert_eq!(ssid_len(&BENCH), Some(8));
        assert_eq!(ssid_len(&ConstProvider::new("", "bench-pass-1")), None);
    }
}
