// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");
    println!("cargo::rerun-if-env-changed=CAMERA_TABS_VERSION");

    // Packagers (flatpak, distro builds) pin the version explicitly
    let version = std::env::var("CAMERA_TABS_VERSION").unwrap_or_else(|_| describe_version());

    println!("cargo::rustc-env=GIT_VERSION={version}");
}

/// Version string derived from the nearest `v*` tag.
///
/// - on a tag: `0.1.0-abcdef1`
/// - after a tag: `0.1.0-dirty-abcdef1`
/// - no tags at all: the short hash, or `unknown` outside a checkout
fn describe_version() -> String {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    let Some(described) = git(&["describe", "--tags", "--always", "--match", "v*"]) else {
        return hash;
    };
    let described = described.strip_prefix('v').unwrap_or(&described);

    // `git describe` yields "<tag>-<commits>-g<hash>" when HEAD is past the tag
    match described.rsplitn(3, '-').collect::<Vec<_>>().as_slice() {
        [commit, _count, tag] => {
            let commit = commit.strip_prefix('g').unwrap_or(commit);
            format!("{tag}-dirty-{commit}")
        }
        _ if described == hash => hash,
        _ => format!("{described}-{hash}"),
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
