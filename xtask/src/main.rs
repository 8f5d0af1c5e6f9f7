//! Custom cargo commands for lexvec.
//!
//! Usage:
//!   cargo xtask test              - Run all tests (default features and none)
//!   cargo xtask check             - check + test + clippy
//!   cargo xtask bench             - Run benchmarks
//!   cargo xtask fuzz [TARGET] [S] - Run fuzz targets for S seconds each

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["query_processing", "feedback_weights"];

const DEFAULT_FUZZ_SECONDS: u64 = 60;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(&args[1..])?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test                 Run all Rust tests, with default features and with none
  check                Quick check (cargo check + test + clippy)
  bench                Run benchmarks
  fuzz [TARGET] [SECS] Run one or all fuzz targets (needs cargo-fuzz, nightly)
"#
    );
}

/// Both feature sets: the sequential fallbacks must stay correct too.
fn test() -> Result<()> {
    run_cargo(&project_root()?, &["test"])?;
    run_cargo(&project_root()?, &["test", "--no-default-features"])
}

fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&root, &["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&root, &["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&root, &["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&project_root()?, &["bench"])
}

fn fuzz(args: &[String]) -> Result<()> {
    let targets: Vec<&str> = match args.first().map(String::as_str) {
        Some(target) if FUZZ_TARGETS.contains(&target) => vec![target],
        Some(target) if target.parse::<u64>().is_err() => {
            bail!("unknown fuzz target '{}', expected one of {:?}", target, FUZZ_TARGETS)
        }
        _ => FUZZ_TARGETS.to_vec(),
    };
    let seconds = args
        .iter()
        .find_map(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FUZZ_SECONDS);

    let root = project_root()?;
    for target in targets {
        println!("Fuzzing {} for {}s...", target, seconds);
        let max_time = format!("-max_total_time={}", seconds);
        run_cargo(&root, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(root: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
