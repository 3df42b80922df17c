use assert_cmd::cargo::cargo_bin_cmd;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Helper to create a small plugin scaffold
///
/// ```text
/// Cargo.toml
/// README.md
/// plugin-name-server/plugin-name.config
/// plugin-name-server/src/plugin_name.rs
/// .git/HEAD
/// .git/plugin-name-ref
/// ```
#[allow(unused)]
pub fn create_scaffold() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(
        root.join("Cargo.toml"),
        r#"[package]
name = "plugin-name"
version = "0.1.0"

[lib]
name = "plugin_name"
"#,
    )
    .unwrap();
    fs::write(root.join("README.md"), "# plugin-name\n\nUse `plugin_name::run()`.\n").unwrap();

    let server = root.join("plugin-name-server");
    fs::create_dir_all(server.join("src")).unwrap();
    fs::write(
        server.join("plugin-name.config"),
        r#"plugin_name_value = "plugin-name""#,
    )
    .unwrap();
    fs::write(
        server.join("src/plugin_name.rs"),
        "pub const NAME: &str = \"plugin-name\";\npub fn plugin_name() {}\n",
    )
    .unwrap();

    let git = root.join(".git");
    fs::create_dir(&git).unwrap();
    fs::write(git.join("HEAD"), "ref: refs/heads/plugin-name\n").unwrap();
    fs::write(git.join("plugin-name-ref"), "plugin_name plugin-name").unwrap();

    temp
}

/// All files under `dir` with their bytes, keyed by path relative to `dir`.
#[allow(unused)]
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Relative paths of every entry under `dir`, skipping `.git`.
#[allow(unused)]
pub fn entry_names(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(|e| e.ok())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// Helper to run an initialization against `root`
pub fn run_init(root: &Path, name: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("scaffold-init");
    cmd.arg(name)
        .arg("--root")
        .arg(root)
        .args(extra_args)
        .env_remove("RUST_LOG");

    cmd.assert()
}
