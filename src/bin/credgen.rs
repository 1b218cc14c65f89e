//! `wifi-credgen`: credential generator for downstream firmware crates.
//!
//! Firmware that depends on `wifi-creds` but keeps its own credentials file
//! runs this from its build script and writes stdout to OUT_DIR:
//!
//! ```bash
//! wifi-credgen wifi_creds.toml > $OUT_DIR/wifi_creds.rs
//! wifi-credgen --check wifi_creds.toml
//! wifi-credgen --template > wifi_creds.toml
//! ```
//!
//! `WIFI_SSID` and `WIFI_PASS` in the environment override the file.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use wifi_creds::policy;

#[allow(dead_code)]
#[path = "../codegen.rs"]
mod codegen;

use codegen::{CodegenError, Inputs};

const USAGE: &str = "usage: wifi-credgen [--check] <credentials.toml> | --template";

enum Mode {
    Render(String),
    Check(String),
    Template,
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args {
        [flag] if flag == "--template" => Some(Mode::Template),
        [flag, path] if flag == "--check" => Some(Mode::Check(path.clone())),
        [path] if !path.starts_with('-') => Some(Mode::Render(path.clone())),
        _ => None,
    }
}

fn load(path: &str) -> Result<codegen::Resolved, CodegenError> {
    let text = fs::read_to_string(path).map_err(|e| CodegenError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    codegen::resolve(Inputs {
        env_ssid: codegen::read_env(codegen::SSID_VAR)?,
        env_pass: codegen::read_env(codegen::PASS_VAR)?,
        local: Some(text.as_str()),
        example: None,
        require_local: true,
    })
}

fn emit(text: &str) -> ExitCode {
    match io::stdout().write_all(text.as_bytes()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wifi-credgen: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(mode) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match mode {
        Mode::Template => emit(&codegen::template()),
        Mode::Render(path) => match load(&path) {
            Ok(resolved) => {
                if resolved.is_placeholder() {
                    eprintln!("wifi-credgen: warning: {} contains placeholder values", path);
                }
                emit(&codegen::render(&resolved, "::wifi_creds"))
            }
            Err(e) => {
                eprintln!("wifi-credgen: {}", e);
                ExitCode::FAILURE
            }
        },
        Mode::Check(path) => match load(&path) {
            Ok(resolved) => {
                eprintln!("ssid:       {}", resolved.ssid);
                let kind = if policy::is_raw_psk(&resolved.password) {
                    " (raw key)"
                } else {
                    ""
                };
                eprintln!("passphrase: {} bytes{}", resolved.password.len(), kind);
                eprintln!("source:     {}", resolved.origin);
                if resolved.is_placeholder() {
                    eprintln!("warning:    placeholder values");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("wifi-credgen: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(matches!(parse_args(&args(&["--template"])), Some(Mode::Template)));
        assert!(matches!(
            parse_args(&args(&["creds.toml"])),
            Some(Mode::Render(p)) if p == "creds.toml"
        ));
        assert!(matches!(
            parse_args(&args(&["--check", "creds.toml"])),
            Some(Mode::Check(p)) if p == "creds.toml"
        ));
    }

    #[test]
    fn test_parse_args_rejects_usage_errors() {
        assert!(parse_args(&args(&[])).is_none());
        assert!(parse_args(&args(&["--verbose"])).is_none());
        assert!(parse_args(&args(&["a.toml", "b.toml"])).is_none());
        assert!(parse_args(&args(&["--template", "a.toml"])).is_none());
    }
}
