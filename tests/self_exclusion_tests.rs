//! Runs a copy of the binary placed inside the scaffold, the way it is shipped.
//!
//! Kept in its own test binary: copying an executable and spawning it while
//! other tests spawn processes can fail with "text file busy". Tests here
//! hold [`SPAWN`] from copy to exit.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static SPAWN: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    SPAWN.lock().unwrap_or_else(|e| e.into_inner())
}

/// Copies the built binary to `dest` and returns its bytes.
fn install_tool(dest: &Path) -> Vec<u8> {
    fs::copy(env!("CARGO_BIN_EXE_scaffold-init"), dest).unwrap();
    fs::read(dest).unwrap()
}

#[test]
fn test_executable_dir_is_root_and_executable_is_untouched() {
    let _guard = serialize();
    let scaffold = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    // The binary embeds the default placeholder, so a rewrite would corrupt it.
    let tool = scaffold.path().join("init-plugin-name");
    let tool_bytes = install_tool(&tool);

    fs::create_dir(scaffold.path().join("plugin-name-core")).unwrap();
    fs::write(
        scaffold.path().join("plugin-name-core/lib.rs"),
        "pub mod plugin_name;",
    )
    .unwrap();
    fs::write(elsewhere.path().join("plugin-name.txt"), "plugin-name").unwrap();

    Command::new(&tool)
        .arg("acme")
        .current_dir(elsewhere.path())
        .assert()
        .success();

    assert_eq!(fs::read(&tool).unwrap(), tool_bytes);
    assert_eq!(
        fs::read_to_string(scaffold.path().join("acme-core/lib.rs")).unwrap(),
        "pub mod acme;"
    );

    // The working directory is not the root.
    assert_eq!(
        fs::read_to_string(elsewhere.path().join("plugin-name.txt")).unwrap(),
        "plugin-name"
    );
}

#[test]
fn test_executable_untouched_when_its_directory_is_renamed() {
    let _guard = serialize();
    let scaffold = TempDir::new().unwrap();
    let root = scaffold.path();

    let bin = root.join("plugin-name-bin");
    fs::create_dir(&bin).unwrap();
    let tool_bytes = install_tool(&bin.join("scaffold-init"));
    fs::write(root.join("z.txt"), "plugin-name").unwrap();

    Command::new(bin.join("scaffold-init"))
        .arg("acme")
        .arg("--root")
        .arg(root)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "directory plugin-name-bin -> acme-bin",
        ));

    assert_eq!(fs::read(root.join("acme-bin/scaffold-init")).unwrap(), tool_bytes);
    assert_eq!(fs::read_to_string(root.join("z.txt")).unwrap(), "acme");
}

/// A running executable cannot be opened for writing on Linux, even by root.
#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_aborts_with_exit_code_1() {
    let _guard = serialize();
    let sleep = Path::new("/bin/sleep");
    if !sleep.exists() {
        return;
    }

    let scaffold = TempDir::new().unwrap();
    let root = scaffold.path();
    let sleeper = root.join("sleeper");
    fs::copy(sleep, &sleeper).unwrap();
    fs::write(root.join("z.txt"), "plugin-name").unwrap();

    let mut child = std::process::Command::new(&sleeper)
        .arg("30")
        .spawn()
        .unwrap();

    // The copied binary is not valid UTF-8, so lossy decoding changes it.
    let assert = assert_cmd::cargo::cargo_bin_cmd!("scaffold-init")
        .arg("foo")
        .arg("--root")
        .arg(root)
        .env_remove("RUST_LOG")
        .assert();

    child.kill().unwrap();
    child.wait().unwrap();

    assert
        .code(1)
        .stderr(predicate::str::contains("Failed to write"));
    assert_eq!(fs::read_to_string(root.join("z.txt")).unwrap(), "plugin-name");
}
