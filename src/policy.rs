//! Credential rules shared by the library, the build script, and `wifi-credgen`.
//!
//! Only `core` is used here so the same file compiles inside the `no_std`
//! library and inside std build tooling via `#[path]`.

use core::fmt;

/// Maximum SSID length in bytes (IEEE 802.11).
pub const MAX_SSID_LEN: usize = 32;

/// Minimum WPA2 passphrase length.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Maximum WPA2 passphrase length.
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Length of a raw pre-shared key written as hex digits.
pub const PSK_HEX_LEN: usize = 64;

/// SSID shipped in the checked-in example file.
pub const PLACEHOLDER_SSID: &str = "Your SSID";

/// Passphrase shipped in the checked-in example file.
pub const PLACEHOLDER_PASS: &str = "Your Password";

/// Where a credential pair came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Origin {
    /// `WIFI_SSID` / `WIFI_PASS` in the build environment
    Environment,
    /// Local, git-ignored credentials file
    LocalFile,
    /// Checked-in example template
    Example,
    /// Supplied by application code at runtime
    Runtime,
}

impl Origin {
    /// Variant name as written in generated source.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Origin::Environment => "Environment",
            Origin::LocalFile => "LocalFile",
            Origin::Example => "Example",
            Origin::Runtime => "Runtime",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Environment => write!(f, "build environment"),
            Origin::LocalFile => write!(f, "local credentials file"),
            Origin::Example => write!(f, "example template"),
            Origin::Runtime => write!(f, "runtime"),
        }
    }
}

/// A rule broken by an SSID or passphrase.
///
/// Never carries the passphrase itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Violation {
    /// SSID is empty
    EmptySsid,

    /// SSID exceeds [`MAX_SSID_LEN`] bytes
    SsidTooLong {
        /// Length in bytes
        len: usize,
    },

    /// Passphrase is empty
    EmptyPassphrase,

    /// Passphrase shorter than [`MIN_PASSPHRASE_LEN`]
    PassphraseTooShort {
        /// Length in characters
        len: usize,
    },

    /// Passphrase longer than [`MAX_PASSPHRASE_LEN`] and not a raw key
    PassphraseTooLong {
        /// Length in bytes
        len: usize,
    },

    /// Passphrase contains a character outside printable ASCII
    PassphraseNotPrintable,

    /// 64-character passphrase that is not all hex digits
    PskNotHex,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptySsid => write!(f, "SSID is empty"),
            Violation::SsidTooLong { len } => {
                write!(f, "SSID is {} bytes, maximum is {}", len, MAX_SSID_LEN)
            }
            Violation::EmptyPassphrase => write!(f, "Passphrase is empty"),
            Violation::PassphraseTooShort { len } => write!(
                f,
                "Passphrase is {} characters, minimum is {}",
                len, MIN_PASSPHRASE_LEN
            ),
            Violation::PassphraseTooLong { len } => write!(
                f,
                "Passphrase is {} bytes, maximum is {} (or {} hex digits)",
                len, MAX_PASSPHRASE_LEN, PSK_HEX_LEN
            ),
            Violation::PassphraseNotPrintable => {
                write!(f, "Passphrase must be printable ASCII")
            }
            Violation::PskNotHex => {
                write!(f, "{}-character key must be hex digits", PSK_HEX_LEN)
            }
        }
    }
}

/// Check an SSID against the 802.11 limits.
pub fn check_ssid(ssid: &str) -> Result<(), Violation> {
    if ssid.is_empty() {
        return Err(Violation::EmptySsid);
    }
    if ssid.len() > MAX_SSID_LEN {
        return Err(Violation::SsidTooLong { len: ssid.len() });
    }
    Ok(())
}

/// Check a passphrase: 8..=63 printable ASCII, or exactly 64 hex digits.
pub fn check_passphrase(passphrase: &str) -> Result<(), Violation> {
    let len = passphrase.len();
    if len == 0 {
        return Err(Violation::EmptyPassphrase);
    }

    if len == PSK_HEX_LEN {
        return if passphrase.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(Violation::PskNotHex)
        };
    }

    if !passphrase.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        return Err(Violation::PassphraseNotPrintable);
    }
    if len < MIN_PASSPHRASE_LEN {
        return Err(Violation::PassphraseTooShort { len });
    }
    if len > MAX_PASSPHRASE_LEN {
        return Err(Violation::PassphraseTooLong { len });
    }
    Ok(())
}

/// Check both values, SSID first.
pub fn check(ssid: &str, passphrase: &str) -> Result<(), Violation> {
    check_ssid(ssid)?;
    check_passphrase(passphrase)
}

/// True if either value is still the example placeholder.
pub fn is_placeholder(ssid: &str, passphrase: &str) -> bool {
    ssid == PLACEHOLDER_SSID || passphrase == PLACEHOLDER_PASS
}

/// True if the passphrase is a raw 64-digit hex key.
pub fn is_raw_psk(passphrase: &str) -> bool {
    passphrase.len() == PSK_HEX_LEN && passphrase.bytes().all(|b| b.is_ascii_hexdigit())
}
