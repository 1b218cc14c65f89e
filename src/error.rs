//! Error types for credential handling.
//!
//! `CredentialError` never carries passphrase text, so it is safe to print
//! or send to a log.

use core::fmt;

use crate::policy::Violation;

/// Credential error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// SSID or passphrase breaks a length or character rule
    Invalid(Violation),

    /// Value does not fit its fixed-capacity buffer
    BufferFull,

    /// Credentials are still the example placeholders
    Placeholder,
}

impl From<Violation> for CredentialError {
    fn from(violation: Violation) -> Self {
        CredentialError::Invalid(violation)
    }
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Invalid(violation) => write!(f, "{}", violation),
            CredentialError::BufferFull => write!(f, "Buffer full"),
            CredentialError::Placeholder => {
                write!(f, "Credentials are placeholders; configure wifi_creds.toml")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CredentialError {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", defmt::Display2Format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", CredentialError::BufferFull), "Buffer full");
        assert_eq!(
            format!("{}", CredentialError::Invalid(Violation::EmptySsid)),
            "SSID is empty"
        );
        assert_eq!(
            format!(
                "{}",
                CredentialError::Invalid(Violation::PassphraseTooShort { len: 3 })
            ),
            "Passphrase is 3 characters, minimum is 8"
        );
        assert_eq!(
            format!("{}", CredentialError::Placeholder),
            "Credentials are placeholders; configure wifi_creds.toml"
        );
    }

    #[test]
    fn test_from_violation() {
        let err: CredentialError = Violation::PskNotHex.into();
        assert_eq!(err, CredentialError::Invalid(Violation::PskNotHex));
    }
}
