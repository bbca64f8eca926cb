mod common;

use common::{TestHome, path_arg, read_json, write_json};
use o3de_cli::commands::sha256::file_digest;
use serde_json::json;
use std::fs;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_file_digest() {
    let home = TestHome::new();
    let file = home.root().join("empty.bin");
    fs::write(&file, b"").unwrap();
    assert_eq!(file_digest(&file).unwrap(), EMPTY_SHA256);
}

#[test]
fn test_sha256_prints_digest() {
    let home = TestHome::new();
    let file = home.root().join("empty.bin");
    fs::write(&file, b"").unwrap();
    assert_eq!(home.run(&["sha256", "--file-path", path_arg(&file)]), 0);
}

#[test]
fn test_sha256_stores_digest_in_json() {
    let home = TestHome::new();
    let file = home.root().join("gem.zip");
    fs::write(&file, b"").unwrap();
    let json_path = home.root().join("gem.json");
    write_json(&json_path, &json!({ "gem_name": "Zipped" }));

    let status = home.run(&[
        "sha256",
        "--file-path",
        path_arg(&file),
        "--json-path",
        path_arg(&json_path),
    ]);
    assert_eq!(status, 0);

    let json = read_json(&json_path);
    assert_eq!(json["sha256"], EMPTY_SHA256);
    assert_eq!(json["gem_name"], "Zipped");
}

#[test]
fn test_sha256_missing_file_exits_one() {
    let home = TestHome::new();
    let missing = home.root().join("missing.zip");
    assert_eq!(home.run(&["sha256", "--file-path", path_arg(&missing)]), 1);
}

#[test]
fn test_sha256_requires_file_path() {
    let home = TestHome::new();
    assert_eq!(home.run(&["sha256"]), 2);
}
