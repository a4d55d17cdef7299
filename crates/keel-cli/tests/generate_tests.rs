//! Black-box tests for `keel generate` against a freshly created application.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

/// A throwaway application, removed when dropped.
struct App {
    _tmp: TempDir,
    root: PathBuf,
}

impl App {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        cargo::cargo_bin_cmd!("keel")
            .current_dir(tmp.path())
            .args(["new", "testApp"])
            .assert()
            .success();
        let root = tmp.path().join("testApp");
        Self { _tmp: tmp, root }
    }

    /// `keel` with the application root as working directory.
    fn cmd(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("keel");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn files_under(&self, rel: &str) -> Vec<PathBuf> {
        let mut out = Vec::new();
        collect_files(&self.root.join(rel), &mut out);
        out.retain(|p| p.file_name().is_some_and(|n| n != ".gitkeep"));
        out
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out);
        } else {
            out.push(path);
        }
    }
}

#[test]
fn new_creates_manifest_and_directories() {
    let app = App::new();
    assert!(app.path("keel.toml").is_file());
    assert!(app.path("api/models").is_dir());
    assert!(app.path("api/controllers").is_dir());
    assert!(app.path("api/adapters").is_dir());
}

#[test]
fn generate_without_arguments_prints_usage() {
    let app = App::new();
    app.cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn generate_api_without_name_prints_usage() {
    let app = App::new();
    app.cmd()
        .args(["generate", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    assert!(app.files_under("api").is_empty());
}

#[test]
fn missing_name_fails_without_writing() {
    let app = App::new();
    for kind in ["model", "controller", "adapter"] {
        app.cmd()
            .args(["generate", kind])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage"))
            .stderr(predicate::str::contains("name"));
    }
    assert!(app.files_under("api").is_empty());
}

#[test]
fn model_is_capitalized() {
    let app = App::new();
    app.cmd()
        .args(["generate", "model", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api/models/User.js"));

    let content = fs::read_to_string(app.path("api/models/User.js")).unwrap();
    assert!(content.contains("User"));
}

#[test]
fn controller_gets_suffix() {
    let app = App::new();
    app.cmd()
        .args(["generate", "controller", "user"])
        .assert()
        .success();
    assert!(app.path("api/controllers/UserController.js").is_file());
}

#[test]
fn adapter_keeps_raw_name() {
    let app = App::new();
    app.cmd()
        .args(["generate", "adapter", "mongo"])
        .assert()
        .success();
    assert!(app.path("api/adapters/mongo/lib/adapter.js").is_file());
    assert!(!app.path("api/adapters/Mongo").exists());
}

#[test]
fn second_run_fails_and_keeps_bytes() {
    let app = App::new();
    for (kind, rel) in [
        ("model", "api/models/User.js"),
        ("controller", "api/controllers/UserController.js"),
        ("adapter", "api/adapters/user/lib/adapter.js"),
    ] {
        app.cmd().args(["generate", kind, "user"]).assert().success();
        fs::write(app.path(rel), "hand edited").unwrap();

        app.cmd()
            .args(["generate", kind, "user"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("already exists"));

        assert_eq!(fs::read_to_string(app.path(rel)).unwrap(), "hand edited");
    }
}

#[test]
fn api_creates_model_and_controller() {
    let app = App::new();
    app.cmd()
        .args(["generate", "api", "foo"])
        .assert()
        .success();
    assert!(app.path("api/models/Foo.js").is_file());
    assert!(app.path("api/controllers/FooController.js").is_file());

    app.cmd().args(["generate", "api", "foo"]).assert().code(1);
    assert_eq!(app.files_under("api").len(), 2);
}

#[test]
fn api_leaves_no_model_when_controller_exists() {
    let app = App::new();
    app.cmd()
        .args(["generate", "controller", "foo"])
        .assert()
        .success();

    app.cmd().args(["generate", "api", "foo"]).assert().code(1);
    assert!(!app.path("api/models/Foo.js").exists());
}

#[test]
fn unknown_generator_fails() {
    let app = App::new();
    app.cmd()
        .args(["generate", "view", "foo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("view"));
    assert!(app.files_under("api").is_empty());
}

#[test]
fn dry_run_writes_nothing() {
    let app = App::new();
    app.cmd()
        .args(["generate", "api", "foo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FooController.js"));
    assert!(app.files_under("api").is_empty());
}

#[test]
fn json_output_reports_created_paths() {
    let app = App::new();
    let out = app
        .cmd()
        .args(["--output-format", "json", "generate", "api", "bar"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["exit_code"], 0);
    assert_eq!(value["created_paths"].as_array().map(Vec::len), Some(2));
}

#[test]
fn json_output_keeps_usage_machine_readable() {
    let app = App::new();
    let out = app
        .cmd()
        .args(["--output-format", "json", "generate", "model"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(value["usage"].as_str().is_some_and(|u| u.contains("Usage")));
    assert!(app.files_under("api").is_empty());
}

#[test]
fn manifest_layout_is_honoured() {
    let app = App::new();
    fs::write(
        app.path("keel.toml"),
        "[layout]\nmodels_dir = \"src/models\"\nextension = \"ts\"\n",
    )
    .unwrap();

    app.cmd()
        .args(["generate", "model", "user"])
        .assert()
        .success();
    assert!(app.path("src/models/User.ts").is_file());
}

#[test]
fn invalid_layout_exits_with_config_code() {
    let app = App::new();
    fs::write(app.path("keel.toml"), "[layout]\nmodels_dir = \"/etc\"\n").unwrap();

    app.cmd()
        .args(["generate", "model", "user"])
        .assert()
        .code(4);
}

#[test]
fn layout_outside_app_root_is_refused() {
    let app = App::new();
    fs::write(app.path("keel.toml"), "[layout]\nmodels_dir = \"../escaped\"\n").unwrap();

    app.cmd()
        .args(["generate", "model", "user"])
        .assert()
        .code(4);
    assert!(!app.root.parent().unwrap().join("escaped").exists());
}

#[test]
fn app_dir_flag_targets_another_directory() {
    let app = App::new();
    let elsewhere = TempDir::new().unwrap();
    cargo::cargo_bin_cmd!("keel")
        .current_dir(elsewhere.path())
        .args(["generate", "model", "post", "-C"])
        .arg(&app.root)
        .assert()
        .success();
    assert!(app.path("api/models/Post.js").is_file());
}

#[test]
fn new_refuses_existing_directory() {
    let app = App::new();
    let parent = app.root.parent().unwrap();
    cargo::cargo_bin_cmd!("keel")
        .current_dir(parent)
        .args(["new", "testApp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
