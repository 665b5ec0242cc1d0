use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .filter(|described| !described.is_empty());

    // Release tags look like "v1.2.0"; outside a checkout the manifest version is used.
    let version = match described {
        Some(described) => described
            .strip_prefix('v')
            .unwrap_or(&described)
            .to_string(),
        None => env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("cargo:rustc-env=SPOREMODS_VERSION={}", version);
}
