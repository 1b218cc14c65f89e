//! Credential resolution and source generation.
//!
//! Std-only. Compiled into `build.rs` and the `wifi-credgen` binary via
//! `#[path]`; it is not part of the `no_std` library. The including crate
//! must provide the shared rules at `crate::policy`.
//!
//! Precedence, highest first:
//! 1. `WIFI_SSID` + `WIFI_PASS` from the environment (both or neither)
//! 2. The local credentials file (`wifi_creds.toml`, git-ignored)
//! 3. The checked-in example template

use core::fmt;
use std::env::VarError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::policy::{self, Origin, Violation};

/// Environment variable carrying the SSID.
pub const SSID_VAR: &str = "WIFI_SSID";

/// Environment variable carrying the passphrase.
pub const PASS_VAR: &str = "WIFI_PASS";

/// Environment variable overriding the local file path.
pub const FILE_VAR: &str = "WIFI_CREDS_FILE";

/// Default local credentials file, never committed.
pub const LOCAL_FILE: &str = "wifi_creds.toml";

/// Checked-in template with placeholder values.
pub const EXAMPLE_FILE: &str = "wifi_creds.example.toml";

/// On-disk layout of a credentials file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsFile {
    /// The `[wifi]` table
    pub wifi: WifiTable,
}

/// The `[wifi]` table.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WifiTable {
    /// Network identifier
    pub ssid: String,
    /// Network passphrase
    pub password: String,
}

impl fmt::Debug for WifiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiTable")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything resolution may look at. Absent sources are `None`.
#[derive(Default)]
pub struct Inputs<'a> {
    /// Value of `WIFI_SSID`
    pub env_ssid: Option<String>,
    /// Value of `WIFI_PASS`
    pub env_pass: Option<String>,
    /// Contents of the local credentials file
    pub local: Option<&'a str>,
    /// Contents of the example template
    pub example: Option<&'a str>,
    /// Never fall back to the example template
    pub require_local: bool,
}

/// A validated credential pair and where it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Network identifier
    pub ssid: String,
    /// Network passphrase
    pub password: String,
    /// Source of both values
    pub origin: Origin,
}

impl Resolved {
    /// True if either value is still an example placeholder.
    pub fn is_placeholder(&self) -> bool {
        policy::is_placeholder(&self.ssid, &self.password)
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Resolution failure.
#[derive(Debug)]
pub enum CodegenError {
    /// Credentials file is not valid TOML or has the wrong shape
    Parse {
        /// File that failed
        origin: Origin,
        /// Parser message
        message: String,
    },

    /// Only one of `WIFI_SSID` / `WIFI_PASS` is set
    PartialEnvironment {
        /// The variable that is missing
        missing: &'static str,
    },

    /// No environment, local file, or template
    NoSource,

    /// An environment variable is set but is not valid UTF-8
    NotUnicode {
        /// The offending variable
        var: &'static str,
    },

    /// Reading a credentials file failed
    Io {
        /// Path that failed
        path: String,
        /// OS message
        message: String,
    },

    /// Values were found but break a rule
    Invalid {
        /// Where the values came from
        origin: Origin,
        /// The broken rule
        violation: Violation,
    },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Parse { origin, message } => {
                write!(f, "Cannot parse {}: {}", origin, message)
            }
            CodegenError::PartialEnvironment { missing } => write!(
                f,
                "{} and {} must be set together ({} is missing)",
                SSID_VAR, PASS_VAR, missing
            ),
            CodegenError::NoSource => write!(
                f,
                "No credentials: set {}/{}, or create {} from {}",
                SSID_VAR, PASS_VAR, LOCAL_FILE, EXAMPLE_FILE
            ),
            CodegenError::NotUnicode { var } => write!(f, "{} is not valid UTF-8", var),
            CodegenError::Io { path, message } => {
                write!(f, "Cannot read {}: {}", path, message)
            }
            CodegenError::Invalid { origin, violation } => {
                write!(f, "Invalid credentials from {}: {}", origin, violation)
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Parse the contents of a credentials file.
pub fn parse(text: &str, origin: Origin) -> Result<WifiTable, CodegenError> {
    toml::from_str::<CredentialsFile>(text)
        .map(|file| file.wifi)
        .map_err(|e| CodegenError::Parse {
            origin,
            message: e.message().to_string(),
        })
}

/// Interpret an environment lookup: unset is `None`, non-UTF-8 is an error.
pub fn env_value(
    var: &'static str,
    value: Result<String, VarError>,
) -> Result<Option<String>, CodegenError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(CodegenError::NotUnicode { var }),
    }
}

/// Read an environment variable through [`env_value`].
pub fn read_env(var: &'static str) -> Result<Option<String>, CodegenError> {
    env_value(var, std::env::var(var))
}

/// Local credentials file: `override_path` (from `WIFI_CREDS_FILE`) relative
/// to `manifest_dir`, or [`LOCAL_FILE`] when unset or empty.
pub fn local_path(manifest_dir: &Path, override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => manifest_dir.join(path),
        _ => manifest_dir.join(LOCAL_FILE),
    }
}

/// Read a file that may legitimately be absent.
pub fn read_optional(path: &Path) -> Result<Option<String>, CodegenError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CodegenError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Pick a source by precedence and validate its values.
pub fn resolve(inputs: Inputs<'_>) -> Result<Resolved, CodegenError> {
    let env_ssid = inputs.env_ssid.filter(|v| !v.is_empty());
    let env_pass = inputs.env_pass.filter(|v| !v.is_empty());

    let (table, origin) = match (env_ssid, env_pass) {
        (Some(ssid), Some(password)) => (WifiTable { ssid, password }, Origin::Environment),
        (Some(_), None) => return Err(CodegenError::PartialEnvironment { missing: PASS_VAR }),
        (None, Some(_)) => return Err(CodegenError::PartialEnvironment { missing: SSID_VAR }),
        (None, None) => {
            let example = inputs.example.filter(|_| !inputs.require_local);
            match (inputs.local, example) {
                (Some(text), _) => (parse(text, Origin::LocalFile)?, Origin::LocalFile),
                (None, Some(text)) => (parse(text, Origin::Example)?, Origin::Example),
                (None, None) => return Err(CodegenError::NoSource),
            }
        }
    };

    policy::check(&table.ssid, &table.password)
        .map_err(|violation| CodegenError::Invalid { origin, violation })?;

    Ok(Resolved {
        ssid: table.ssid,
        password: table.password,
        origin,
    })
}

/// Render Rust source defining `WIFI_SSID`, `WIFI_PASS` and `ORIGIN`.
///
/// `crate_path` names the crate that owns `Origin`: `crate` inside
/// `wifi-creds` itself, `::wifi_creds` for downstream firmware.
pub fn render(resolved: &Resolved, crate_path: &str) -> String {
    let mut out = String::new();
    out.push_str("// @generated by wifi-creds. Do not edit or commit.\n");
    out.push_str(&format!("// Source: {}\n\n", resolved.origin));
    out.push_str("/// Network identifier (SSID).\n");
    out.push_str(&format!(
        "pub const WIFI_SSID: &str = {};\n\n",
        literal(&resolved.ssid)
    ));
    out.push_str("/// Network passphrase.\n");
    out.push_str(&format!(
        "pub const WIFI_PASS: &str = {};\n\n",
        literal(&resolved.password)
    ));
    out.push_str("/// Where `WIFI_SSID` and `WIFI_PASS` were taken from at build time.\n");
    out.push_str(&format!(
        "pub const ORIGIN: {path}::Origin = {path}::Origin::{variant};\n",
        path = crate_path,
        variant = resolved.origin.variant_name()
    ));
    out
}

/// Template for a new credentials file, with placeholder values.
pub fn template() -> String {
    format!(
        "# Copy to {local} and fill in. {local} is git-ignored; never commit it.\n\
         # {ssid_var} and {pass_var} in the build environment take precedence.\n\
         \n\
         [wifi]\n\
         ssid = {ssid}\n\
         password = {pass}\n",
        local = LOCAL_FILE,
        ssid_var = SSID_VAR,
        pass_var = PASS_VAR,
        ssid = literal(policy::PLACEHOLDER_SSID),
        pass = literal(policy::PLACEHOLDER_PASS),
    )
}

/// Quote and escape a string as a Rust string literal.
///
/// `Debug` for `str` escapes quotes, backslashes, control and
/// bidirectional-override characters, so the result always compiles.
fn literal(value: &str) -> String {
    format!("{:?}", value)
}
