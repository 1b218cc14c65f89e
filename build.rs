//! Build script for wifi-creds
//!
//! Resolves the network credentials and writes `wifi_creds.rs` to OUT_DIR,
//! where `src/lib.rs` includes it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/policy.rs"]
mod policy;

#[allow(dead_code)]
#[path = "src/codegen.rs"]
mod codegen;

use codegen::{CodegenError, Inputs};
use policy::Origin;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    println!("cargo:rerun-if-env-changed={}", codegen::SSID_VAR);
    println!("cargo:rerun-if-env-changed={}", codegen::PASS_VAR);
    println!("cargo:rerun-if-env-changed={}", codegen::FILE_VAR);

    let file_override = match codegen::read_env(codegen::FILE_VAR) {
        Ok(value) => value,
        Err(e) => panic!("Credential generation failed: {}", e),
    };
    let local_path = codegen::local_path(&manifest_dir, file_override.as_deref());
    let example_path = manifest_dir.join(codegen::EXAMPLE_FILE);

    // A missing watched file counts as always stale, so the local file is only
    // watched once it exists. Creating it the first time needs `touch build.rs`.
    if local_path.exists() {
        println!("cargo:rerun-if-changed={}", local_path.display());
    }
    println!("cargo:rerun-if-changed={}", example_path.display());

    let require_credentials = env::var_os("CARGO_FEATURE_REQUIRE_CREDENTIALS").is_some();

    let resolved = match load(&local_path, &example_path, require_credentials) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("wifi-creds: {}", e);
            panic!("Credential generation failed: {}", e);
        }
    };

    match resolved.origin {
        Origin::Environment => {
            println!("cargo:warning=Using {} from environment: {}", codegen::SSID_VAR, resolved.ssid);
            println!("cargo:warning=Using {} from environment (hidden)", codegen::PASS_VAR);
        }
        Origin::Example => {
            println!(
                "cargo:warning=No {} found, building with placeholder credentials from {}",
                codegen::LOCAL_FILE,
                codegen::EXAMPLE_FILE
            );
        }
        Origin::LocalFile | Origin::Runtime => {}
    }

    if resolved.origin != Origin::Example && resolved.is_placeholder() {
        println!(
            "cargo:warning=Credentials from {} still contain placeholder values",
            resolved.origin
        );
    }

    fs::write(out_dir.join("wifi_creds.rs"), codegen::render(&resolved, "crate"))
        .expect("Failed to write wifi_creds.rs");
}

fn load(
    local_path: &Path,
    example_path: &Path,
    require_credentials: bool,
) -> Result<codegen::Resolved, CodegenError> {
    let local = codegen::read_optional(local_path)?;
    let example = codegen::read_optional(example_path)?;

    codegen::resolve(Inputs {
        env_ssid: codegen::read_env(codegen::SSID_VAR)?,
        env_pass: codegen::read_env(codegen::PASS_VAR)?,
        local: local.as_deref(),
        example: example.as_deref(),
        require_local: require_credentials,
    })
}
