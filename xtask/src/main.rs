//! Custom cargo commands for sidesearch.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser bundle with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (tests, clippy, wasm build, constants)
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy)
  bench       Run benchmarks
  build-wasm  Build pkg/ with wasm-pack (web target)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Sidesearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking default constants...");
    verify_constants()?;
    println!("✓ Constants match the theme defaults\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking wasm target...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm",
    ])?;
    println!("✓ wasm target builds\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the browser bundle
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Bundle written to {}", root.join("pkg").display());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The theme's script hardcodes these; the crate must agree.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let config_rs = std::fs::read_to_string(root.join("src/config.rs"))
        .context("Failed to read src/config.rs")?;

    let expected = [
        ("INDEX_PATH", "\"/index.json\""),
        ("MIN_QUERY_CHARS", "3"),
        ("MAX_RESULTS", "10"),
        ("SNIPPET_LENGTH", "140"),
    ];

    for (name, value) in expected {
        match extract_const(&config_rs, name) {
            Some(found) if found == value => {}
            Some(found) => bail!("{} is {}, expected {}", name, found, value),
            None => bail!("{} not found in src/config.rs", name),
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<String> {
    // Look for "pub const NAME: Type = value;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim().to_string())
}
