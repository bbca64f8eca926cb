use anyhow::{Context as _, Result};
use clap::Args;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Context;
use crate::manifest::{read_json, write_json};
use crate::registry::{CommandRegistry, Fragment};

#[derive(Args, Debug)]
pub struct Sha256Args {
    /// File to hash
    #[arg(long, value_name = "FILE")]
    file_path: PathBuf,

    /// JSON file to store the digest in, under the "sha256" key
    #[arg(long, value_name = "FILE")]
    json_path: Option<PathBuf>,
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "sha256",
        "Compute the SHA-256 digest of a file",
        run,
    ))
}

fn run(args: &Sha256Args, _ctx: &Context) -> Result<i32> {
    if !args.file_path.is_file() {
        eprintln!("File does not exist: {}", args.file_path.display());
        return Ok(1);
    }
    let digest = file_digest(&args.file_path)?;

    let Some(json_path) = &args.json_path else {
        println!("{digest}");
        return Ok(0);
    };

    let mut json = read_json(json_path)?;
    let Value::Object(fields) = &mut json else {
        return Err(anyhow::anyhow!("{} is not a JSON object", json_path.display()));
    };
    fields.insert("sha256".to_string(), Value::String(digest.clone()));
    write_json(json_path, &json)?;
    println!("Stored sha256 {digest} in {}", json_path.display());
    Ok(0)
}

/// Lowercase hex SHA-256 of the file at `path`.
pub fn file_digest(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}
