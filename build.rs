/// Build script for warnsdorff
/// Captures build environment for reproducibility reporting

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Capture git hash for the TUI status line
    if let Ok(output) = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            if let Ok(hash) = String::from_utf8(output.stdout) {
                println!("cargo:rustc-env=GIT_HASH={}", hash.trim());
            }
        }
    }
}
