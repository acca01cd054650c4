use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    _temp: TempDir,
    cache_dir: PathBuf,
    work_dir: PathBuf,
    config_path: PathBuf,
}

impl Sandbox {
    /// A pre-populated cache so no command ever needs the network.
    fn new(templates: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("tempdir should succeed");
        let cache_dir = temp.path().join("cache");
        let templates_dir = cache_dir.join("gitignore").join("templates");
        fs::create_dir_all(&templates_dir).expect("create_dir_all should succeed");
        for (name, content) in templates {
            fs::write(templates_dir.join(format!("{name}.gitignore")), content)
                .expect("write should succeed");
        }
        let work_dir = temp.path().join("work");
        fs::create_dir_all(&work_dir).expect("create_dir_all should succeed");
        let config_path = temp.path().join("config.toml");

        Self {
            _temp: temp,
            cache_dir,
            work_dir,
            config_path,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitignore").expect("binary should build");
        cmd.current_dir(&self.work_dir)
            .env("GITIGNORE_CLI_CACHE_DIR", &self.cache_dir)
            .env("GITIGNORE_CLI_CONFIG", &self.config_path)
            .env_remove("GITIGNORE_CLI_TEMPLATE_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }
}

fn write_template(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).expect("create_dir_all should succeed");
    fs::write(dir.join(format!("{name}.gitignore")), content).expect("write should succeed");
}

#[test]
fn concatenates_templates_in_order() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n"), ("Node", "node_modules/\n")]);

    sandbox
        .cmd()
        .args(["Python", "Node"])
        .assert()
        .success()
        .stdout("*.pyc\n\nnode_modules/\n\n");
}

#[test]
fn undefined_template_is_written_inline() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);

    sandbox
        .cmd()
        .arg("Cobol")
        .assert()
        .success()
        .stdout(
            "#!! ERROR: Cobol is undefined. Use list command to see defined gitignore types !!#\n",
        );
}

#[test]
fn list_prints_sorted_names() {
    let sandbox = Sandbox::new(&[("Rust", ""), ("Go", ""), ("Python", "")]);

    sandbox
        .cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout("Go\nPython\nRust\n");
}

#[test]
fn list_on_empty_cache_prints_empty_line() {
    let sandbox = Sandbox::new(&[]);

    sandbox.cmd().arg("-l").assert().success().stdout("\n");
}

#[test]
fn list_ignores_templates_arguments() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);

    sandbox
        .cmd()
        .args(["--list", "Python"])
        .assert()
        .success()
        .stdout("Python\n");
}

#[test]
fn no_templates_prints_usage_hint() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No templates specified"))
        .stderr(predicate::str::contains("--list' to see available templates"));
}

#[test]
fn append_outside_repository_falls_back_to_stdout() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);

    let assert = sandbox
        .cmd()
        .args(["--append", "Python"])
        .assert()
        .success()
        .stdout("*.pyc\n\n");

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("is not a git repository").count(), 1);
    assert!(stderr.contains("outputted to stdout instead."));
    assert!(!sandbox.path(".gitignore").exists());
}

#[test]
fn out_flag_appends_to_file() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);
    let out = sandbox.path("ignore.txt");
    fs::write(&out, "# existing\n").expect("write should succeed");

    sandbox
        .cmd()
        .arg("-o")
        .arg(&out)
        .arg("Python")
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&out).expect("read should succeed");
    assert_eq!(content, "# existing\n*.pyc\n\n");
}

#[test]
fn custom_dir_from_env_overrides_cache() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);
    let custom = sandbox.path("custom");
    write_template(&custom, "Python", "__pycache__/\n");

    sandbox
        .cmd()
        .env("GITIGNORE_CLI_TEMPLATE_DIR", &custom)
        .arg("Python")
        .assert()
        .success()
        .stdout("__pycache__/\n\n");
}

#[test]
fn custom_dir_flag_wins_over_env() {
    let sandbox = Sandbox::new(&[]);
    let from_env = sandbox.path("env-templates");
    let from_flag = sandbox.path("flag-templates");
    write_template(&from_env, "Go", "env\n");
    write_template(&from_flag, "Go", "flag\n");

    sandbox
        .cmd()
        .env("GITIGNORE_CLI_TEMPLATE_DIR", &from_env)
        .arg("-c")
        .arg(&from_flag)
        .arg("Go")
        .assert()
        .success()
        .stdout("flag\n\n");
}

#[test]
fn malformed_config_file_fails() {
    let sandbox = Sandbox::new(&[("Python", "*.pyc\n")]);
    fs::write(&sandbox.config_path, "repo_url = [").expect("write should succeed");

    sandbox
        .cmd()
        .arg("Python")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
