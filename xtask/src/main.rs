//! Custom cargo commands for tokensift.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <t>  - Run one fuzz target for a minute

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["scanner", "match_invariants", "search_ranking"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify         Run full verification suite (markers + tests + clippy + bias table)
  test           Run all Rust tests, with and without default features
  check          Quick check (cargo check + test + clippy)
  bench          Run benchmarks
  fuzz <target>  Run a fuzz target for 60s (needs cargo-fuzz and nightly)

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("tokensift Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying documented default biases...");
    verify_bias_table()?;
    println!("✓ Bias table matches code\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

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

/// Run one fuzz target for a bounded time
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target, expected one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }

    let fuzz_dir = project_root()?.join("fuzz");
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }

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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed contract checks!",
            count
        );
    }

    Ok(())
}

/// The matching module documents each algorithm's default bias in a table.
/// Check the table against the `default_bias` match arms.
fn verify_bias_table() -> Result<()> {
    let root = project_root()?;
    let path = root.join("src/matching/mod.rs");
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for name in ["TokensStrict", "LetterTokens", "TokensLenient", "Wildcard"] {
        let code = extract_code_bias(&content, name)
            .with_context(|| format!("No default_bias arm for {}", name))?;
        let documented = extract_table_bias(&content, name)
            .with_context(|| format!("No bias table row for {}", name))?;
        if code != documented {
            bail!("{}: default_bias is {} but the table says {}", name, code, documented);
        }
        println!("  {:<14} {}", name, code);
    }

    Ok(())
}

fn extract_code_bias(content: &str, name: &str) -> Option<f64> {
    // Look for "Algorithm::Wildcard => 1.0," inside `fn default_bias`
    let body = content.split("fn default_bias").nth(1)?;
    let body = body.split("\n    }").next()?;
    let arm = format!("Algorithm::{} =>", name);
    body.lines()
        .find(|line| line.contains(&arm))
        .and_then(|line| line.split("=>").nth(1))
        .and_then(|num| num.trim().trim_end_matches(',').parse().ok())
}

fn extract_table_bias(content: &str, name: &str) -> Option<f64> {
    // Look for "//! | `Wildcard` | ... | 1 |"
    let cell = format!("`{}`", name);
    content
        .lines()
        .filter(|line| line.starts_with("//! |") && line.contains(&cell))
        .find_map(|line| {
            line.trim_end()
                .trim_end_matches('|')
                .rsplit('|')
                .next()
                .and_then(|num| num.trim().parse().ok())
        })
}
