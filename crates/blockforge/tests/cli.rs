//! End-to-end CLI tests: command surface and exit statuses.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

use serde_json::{json, Value};
use tempfile::TempDir;

fn blockforge(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("blockforge").expect("binary built");
    cmd.current_dir(dir);
    cmd
}

fn write_record(root: &Path, kind: &str, category: &str, id: &str, value: &Value) {
    let dir = root.join("src").join(kind).join(category).join(id);
    fs::create_dir_all(&dir).expect("create record dir");
    fs::write(
        dir.join(format!("{id}.json")),
        serde_json::to_string_pretty(value).expect("serialize record"),
    )
    .expect("write record json");
    fs::write(dir.join(format!("{id}.html")), "<div>fixture</div>").expect("write record html");
}

fn record_value(id: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": id,
        "description": "fixture",
        "category": category,
        "tags": ["new"],
        "metadata": {
            "author": "Blockforge Team",
            "created": "2025-01-01T00:00:00Z",
            "updated": "2025-01-01T00:00:00Z",
            "version": "1.0.0"
        }
    })
}

/// One valid block plus one template missing its metadata.
fn mixed_tree(root: &Path) {
    write_record(root, "blocks", "hero", "hero-1", &record_value("hero-1", "hero"));

    let mut broken = record_value("my-blog", "blog");
    broken.as_object_mut().unwrap().remove("metadata");
    write_record(root, "templates", "blog", "my-blog", &broken);
}

#[test]
fn validate_exits_nonzero_naming_the_invalid_template() {
    let tmp = TempDir::new().expect("tempdir");
    mixed_tree(tmp.path());

    blockforge(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("Template my-blog"))
        .stdout(contains("metadata"));
}

#[test]
fn validate_succeeds_on_a_clean_tree() {
    let tmp = TempDir::new().expect("tempdir");
    write_record(
        tmp.path(),
        "blocks",
        "hero",
        "hero-1",
        &record_value("hero-1", "hero"),
    );

    blockforge(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("All records are valid"));
}

#[test]
fn build_excludes_the_invalid_template_but_succeeds() {
    let tmp = TempDir::new().expect("tempdir");
    mixed_tree(tmp.path());

    blockforge(tmp.path()).arg("build").assert().success();

    let dist = tmp.path().join("dist");
    let blocks: Value =
        serde_json::from_str(&fs::read_to_string(dist.join("api/blocks.json")).unwrap()).unwrap();
    assert_eq!(blocks.as_array().unwrap().len(), 1);
    assert_eq!(blocks[0]["id"], "hero-1");

    let templates: Value =
        serde_json::from_str(&fs::read_to_string(dist.join("api/templates.json")).unwrap())
            .unwrap();
    assert!(templates.as_array().unwrap().is_empty());

    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(dist.join("api/index.json")).unwrap()).unwrap();
    assert_eq!(manifest["blocks"], 1);
    assert_eq!(manifest["templates"], 0);

    assert!(dist.join("index.html").exists());
    assert!(dist.join("api/blocks/hero/hero-1.json").exists());
}

#[test]
fn create_block_scaffolds_without_a_terminal() {
    let tmp = TempDir::new().expect("tempdir");

    // stdin is closed, so the "generate preview now?" confirmation declines
    // and no browser is launched.
    blockforge(tmp.path())
        .args(["create-block", "-n", "My Cool Block!", "-c", "content"])
        .assert()
        .success();

    let dir = tmp.path().join("src/blocks/content/my-cool-block");
    assert!(dir.join("my-cool-block.json").exists());
    assert!(dir.join("my-cool-block.html").exists());

    let value: Value =
        serde_json::from_str(&fs::read_to_string(dir.join("my-cool-block.json")).unwrap())
            .unwrap();
    assert_eq!(value["id"], "my-cool-block");
    assert_eq!(value["metadata"]["author"], "Blockforge Team");
}

#[test]
fn create_block_with_invalid_category_is_fatal() {
    let tmp = TempDir::new().expect("tempdir");

    blockforge(tmp.path())
        .args(["create-block", "-n", "Test", "-c", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid category: bogus"));

    assert!(!tmp.path().join("src/blocks").exists());
}

#[test]
fn create_template_respects_config_author() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("blockforge.toml"),
        "[scaffold]\nauthor = \"Acme Design\"\n",
    )
    .unwrap();

    blockforge(tmp.path())
        .args(["create-template", "-n", "Shop Front", "-c", "product"])
        .assert()
        .success();

    let json_path = tmp.path().join("src/templates/product/shop-front/shop-front.json");
    let value: Value = serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(value["metadata"]["author"], "Acme Design");
}

#[test]
fn scaffolded_records_pass_validate_and_build() {
    let tmp = TempDir::new().expect("tempdir");

    blockforge(tmp.path())
        .args(["create-block", "-n", "Hero Banner", "-c", "hero"])
        .assert()
        .success();

    blockforge(tmp.path()).arg("validate").assert().success();

    blockforge(tmp.path()).arg("build").assert().success();

    let blocks: Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("dist/api/blocks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(blocks[0]["id"], "hero-banner");
}
