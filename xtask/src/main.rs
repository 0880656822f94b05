//! Custom cargo commands for the search crate.
//!
//! Usage:
//!   cargo xtask check   - cargo check + clippy
//!   cargo xtask test    - run all tests
//!   cargo xtask bench   - run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check    cargo check + clippy (-D warnings)
  test     cargo test
  bench    cargo bench
"#
    );
}

fn check() -> Result<()> {
    println!("[1/2] cargo check...");
    run_cargo(&["check"])?;
    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--", "-D", "warnings"])?;
    println!("\n✓ checks passed");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().unwrap());
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("failed to run cargo {:?}", args))?;
    if !status.success() {
        bail!("cargo {:?} failed", args);
    }
    Ok(())
}
