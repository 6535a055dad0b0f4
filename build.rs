//! Stamps the binary with `SITE_VERSION` and `SITE_GIT_SHA`.
//!
//! Both can be pinned from the environment. Otherwise the version is the
//! crate version and the SHA comes from `GITHUB_SHA` or the local checkout,
//! with "N/A" when neither is available.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "N/A";
const SHORT_SHA_LEN: usize = 7;

fn main() {
    for var in ["SITE_VERSION", "SITE_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    // rust-embed bakes static/ into the binary
    println!("cargo:rerun-if-changed=static");

    println!("cargo:rustc-env=SITE_VERSION={}", site_version());
    println!("cargo:rustc-env=SITE_GIT_SHA={}", site_git_sha());
}

fn site_version() -> String {
    env::var("SITE_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

fn site_git_sha() -> String {
    if let Ok(sha) = env::var("SITE_GIT_SHA") {
        return sha;
    }
    if let Ok(sha) = env::var("GITHUB_SHA") {
        return sha.chars().take(SHORT_SHA_LEN).collect();
    }
    checkout_sha().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Short SHA of `HEAD`, `None` outside a git checkout or without git.
fn checkout_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string())
}
