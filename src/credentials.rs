//! Owned, validated credential types.
//!
//! Values are copied into fixed-capacity `heapless` strings, so a
//! `WifiCredentials` never borrows and never allocates.

use core::fmt;

use subtle::ConstantTimeEq;

use crate::error::CredentialError;
use crate::policy::{self, Origin, MAX_SSID_LEN, PSK_HEX_LEN};

/// Network identifier, 1 to 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ssid(heapless::String<MAX_SSID_LEN>);

impl Ssid {
    /// Validate and copy an SSID.
    pub fn new(ssid: &str) -> Result<Self, CredentialError> {
        policy::check_ssid(ssid)?;

        let mut s = heapless::String::new();
        s.push_str(ssid).map_err(|_| CredentialError::BufferFull)?;
        Ok(Self(s))
    }

    /// The SSID text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network passphrase or raw hex key.
///
/// `Debug` is redacted and there is no `Display`; use
/// [`expose_secret`](Self::expose_secret) to hand the value to the radio driver.
/// Equality runs in constant time.
#[derive(Clone)]
pub struct Passphrase(heapless::String<PSK_HEX_LEN>);

impl Passphrase {
    /// Validate and copy a passphrase.
    pub fn new(passphrase: &str) -> Result<Self, CredentialError> {
        policy::check_passphrase(passphrase)?;

        let mut s = heapless::String::new();
        s.push_str(passphrase).map_err(|_| CredentialError::BufferFull)?;
        Ok(Self(s))
    }

    /// The secret text.
    pub fn expose_secret(&self) -> &str {
        self.0.as_str()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty passphrases are rejected by [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this is a 64-digit hex pre-shared key rather than a passphrase.
    pub fn is_raw_psk(&self) -> bool {
        policy::is_raw_psk(self.expose_secret())
    }
}

impl PartialEq for Passphrase {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl Eq for Passphrase {}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

/// A validated SSID/passphrase pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: Ssid,
    passphrase: Passphrase,
    origin: Origin,
}

impl WifiCredentials {
    /// Validate and copy both values.
    pub fn new(ssid: &str, passphrase: &str, origin: Origin) -> Result<Self, CredentialError> {
        Ok(Self {
            ssid: Ssid::new(ssid)?,
            passphrase: Passphrase::new(passphrase)?,
            origin,
        })
    }

    /// Network identifier.
    pub fn ssid(&self) -> &Ssid {
        &self.ssid
    }

    /// Network passphrase.
    pub fn passphrase(&self) -> &Passphrase {
        &self.passphrase
    }

    /// Where the values came from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// True if built from the example template or still holding a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.origin == Origin::Example
            || policy::is_placeholder(self.ssid.as_str(), self.passphrase.expose_secret())
    }

    /// Reject placeholder credentials.
    ///
    /// Call before joining a network so a board flashed without real
    /// credentials fails fast instead of retrying forever.
    pub fn require_configured(self) -> Result<Self, CredentialError> {
        if self.is_placeholder() {
            Err(CredentialError::Placeholder)
        } else {
            Ok(self)
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Origin {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.variant_name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Ssid {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Passphrase {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "<redacted>")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WifiCredentials {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "WifiCredentials {{ ssid: {}, passphrase: {}, origin: {} }}",
            self.ssid,
            self.passphrase,
            self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Violation;
    extern crate std;
    use std::format;

    #[test]
    fn test_ssid_new() {
        let ssid = Ssid::new("HomeNet").unwrap();
        assert_eq!(ssid.as_str(), "HomeNet");
        assert_eq!(format!("{}", ssid), "HomeNet");
    }

    #[test]
    fn test_ssid_rejects_invalid() {
        assert_eq!(
            Ssid::new(""),
            Err(CredentialError::Invalid(Violation::EmptySsid))
        );
        assert_eq!(
            Ssid::new("0123456789abcdef0123456789abcdefX"),
            Err(CredentialError::Invalid(Violation::SsidTooLong { len: 33 }))
        );
        assert!(Ssid::new("0123456789abcdef0123456789abcdef").is_ok());
    }

    #[test]
    fn test_passphrase_debug_is_redacted() {
        let pass = Passphrase::new("hunter2hunter2").unwrap();
        let shown = format!("{:?}", pass);
        assert_eq!(shown, "Passphrase(<redacted>)");
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_credentials_debug_hides_passphrase() {
        let creds = WifiCredentials::new("HomeNet", "hunter2hunter2", Origin::Runtime).unwrap();
        let shown = format!("{:?}", creds);
        assert!(shown.contains("HomeNet"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_passphrase_equality() {
        let a = Passphrase::new("correct horse").unwrap();
        let b = Passphrase::new("correct horse").unwrap();
        let c = Passphrase::new("correct horsf").unwrap();
        let d = Passphrase::new("correct horse battery").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_passphrase_accessors() {
        let pass = Passphrase::new("12345678").unwrap();
        assert_eq!(pass.expose_secret(), "12345678");
        assert_eq!(pass.len(), 8);
        assert!(!pass.is_empty());
        assert!(!pass.is_raw_psk());

        let key = Passphrase::new(
            "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
        )
        .unwrap();
        assert!(key.is_raw_psk());
        assert_eq!(key.len(), 64);
    }

    #[test]
    fn test_credentials_reports_first_violation() {
        assert_eq!(
            WifiCredentials::new("", "short", Origin::Runtime),
            Err(CredentialError::Invalid(Violation::EmptySsid))
        );
        assert_eq!(
            WifiCredentials::new("HomeNet", "short", Origin::Runtime),
            Err(CredentialError::Invalid(Violation::PassphraseTooShort {
                len: 5
            }))
        );
    }

    #[test]
    fn test_placeholder_detection() {
        let example = WifiCredentials::new("HomeNet", "realpassword", Origin::Example).unwrap();
        assert!(example.is_placeholder());

        let left_in = WifiCredentials::new(
            policy::PLACEHOLDER_SSID,
            "realpassword",
            Origin::LocalFile,
        )
        .unwrap();
        assert!(left_in.is_placeholder());

        let real = WifiCredentials::new("HomeNet", "realpassword", Origin::LocalFile).unwrap();
        assert!(!real.is_placeholder());
    }

    #[test]
    fn test_require_configured() {
        let placeholder = WifiCredentials::new(
            policy::PLACEHOLDER_SSID,
            policy::PLACEHOLDER_PASS,
            Origin::Example,
        )
        .unwrap();
        assert_eq!(
            placeholder.require_configured(),
            Err(CredentialError::Placeholder)
        );

        let real = WifiCredentials::new("HomeNet", "realpassword", Origin::Environment).unwrap();
        let real = real.require_configured().unwrap();
        assert_eq!(real.ssid().as_str(), "HomeNet");
        assert_eq!(real.passphrase().expose_secret(), "realpassword");
        assert_eq!(real.origin(), Origin::Environment);
    }
}
