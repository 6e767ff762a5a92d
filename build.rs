use std::process::Command;

/// Run `git rev-parse` with the given extra args, or "unknown" outside a git checkout.
fn git_rev(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |hash| hash.trim().to_string())
}

fn main() {
    // shown by `trigram --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short", "HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
