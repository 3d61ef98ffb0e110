use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn receipts_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("receipts"))
}

fn init_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("receipts-config");
    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();
    config_path
}

fn write_config(config_path: &Path, content: &str) {
    fs::write(config_path.join("config.toml"), content).unwrap();
}

fn files_with_extension(dir: &Path, ext: &str) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|x| x == ext)
        })
        .count()
}

#[test]
fn test_help() {
    receipts_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Synthetic receipt generator and stage uploader",
        ));
}

#[test]
fn test_version() {
    receipts_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("receipts"));
}

#[test]
fn test_templates_list() {
    receipts_cmd()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("TechAds Pro"))
        .stdout(predicate::str::contains("Performance Plus"))
        .stdout(predicate::str::contains("VENDOR"));
}

#[test]
fn test_templates_list_pricing() {
    receipts_cmd()
        .args(["templates", "--kind", "pricing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Impact Advertising"))
        .stdout(predicate::str::contains("TechAds Pro").not());
}

#[test]
fn test_generate_json_without_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");
    let out = temp_dir.path().join("out");

    receipts_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "generate",
            "-n",
            "3",
            "--format",
            "json",
            "--seed",
            "7",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 3 generated, 0 failed"));

    assert_eq!(files_with_extension(&out, "json"), 3);
}

#[test]
fn test_generate_with_template_index_wraps() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    receipts_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "generate",
            "-n",
            "1",
            "-t",
            "22",
            "--format",
            "json",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt_TechAds_Pro_"));
}

#[test]
fn test_sample_pricing_set() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("samples");

    receipts_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "sample",
            "--per-template",
            "1",
            "--kind",
            "pricing",
            "--format",
            "json",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt_v2_Global_Media_Partners_"));

    assert_eq!(files_with_extension(&out, "json"), 3);
}

#[test]
fn test_generate_uses_config_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    write_config(
        &config_path,
        "[generator]\noutput_dir = \"batch\"\nformat = \"json\"\nseed = 3\n",
    );

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "generate", "-n", "2"])
        .assert()
        .success();

    assert_eq!(files_with_extension(&config_path.join("batch"), "json"), 2);
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("receipts-config");

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized receipts config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("output").is_dir());
    assert!(config_path.join("stage").is_dir());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_upload_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "upload"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_upload_rejects_placeholder_account() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "upload"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("YOUR_ACCOUNT_IDENTIFIER"));
}

#[test]
fn test_upload_rejects_missing_key_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    write_config(
        &config_path,
        r#"[store]
kind = "http"
account = "acme"
endpoint = "http://127.0.0.1:9"
key_file = "stage.token"
"#,
    );

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "upload"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Credential file not found"));
}

#[test]
fn test_upload_rejects_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    write_config(&config_path, "[store\nkind = ");

    receipts_cmd()
        .args(["-C", config_path.to_str().unwrap(), "upload"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_upload_missing_receipts_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    write_config(
        &config_path,
        "[store]\nkind = \"directory\"\naccount = \"acme\"\npath = \"stage\"\n",
    );

    receipts_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "upload",
            "-d",
            temp_dir.path().join("nowhere").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Receipts directory not found"));
}

#[test]
fn test_upload_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    write_config(
        &config_path,
        "[store]\nkind = \"directory\"\naccount = \"acme\"\npath = \"stage\"\n",
    );

    let local = temp_dir.path().join("pdfs");
    fs::create_dir(&local).unwrap();
    fs::write(local.join("one.pdf"), "%PDF-1.7").unwrap();
    fs::write(local.join("two.pdf"), "%PDF-1.7").unwrap();

    let args = [
        "-C",
        config_path.to_str().unwrap(),
        "upload",
        "-d",
        local.to_str().unwrap(),
        "-s",
        "RAW.TEST",
    ];

    receipts_cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("one.pdf... UPLOADED"))
        .stdout(predicate::str::contains("Total files in stage: 2"));

    assert!(config_path
        .join("stage/acme/RAW.TEST/two.pdf")
        .exists());

    receipts_cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("already in the stage"));
}
