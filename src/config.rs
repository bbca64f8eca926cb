//! Global options and the resolved context handed to every subcommand.

use anyhow::{Context as _, Result};
use clap::{ArgAction, Args};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_HOME_DIR: &str = ".o3de";
const MANIFEST_FILE: &str = "o3de_manifest.json";
const CONFIG_FILE: &str = "o3de-cli.toml";

// Options accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory holding the manifest and user registry (default: ~/.o3de)
    #[arg(long, global = true, value_name = "DIR")]
    pub o3de_home: Option<PathBuf>,

    /// Manifest file to read and update (default: <o3de-home>/o3de_manifest.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Settings file (default: <o3de-home>/o3de-cli.toml, if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Contents of the optional TOML settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub home: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }
}

/// Resolved locations shared by all subcommands.
#[derive(Debug, Clone)]
pub struct Context {
    pub o3de_home: PathBuf,
    pub manifest_path: PathBuf,
    pub log_level: Option<String>,
}

impl Context {
    /// Resolve the context with flags taking precedence over the settings file.
    pub fn resolve(globals: &GlobalArgs) -> Result<Self> {
        let default_home = match &globals.o3de_home {
            Some(home) => home.clone(),
            None => default_o3de_home()?,
        };

        let settings = match &globals.config {
            Some(path) => Settings::load(path)?,
            None => {
                let implicit = default_home.join(CONFIG_FILE);
                if implicit.is_file() {
                    Settings::load(&implicit)?
                } else {
                    Settings::default()
                }
            }
        };

        let o3de_home = globals
            .o3de_home
            .clone()
            .or(settings.home)
            .unwrap_or(default_home);
        let manifest_path = globals
            .manifest
            .clone()
            .or(settings.manifest)
            .unwrap_or_else(|| o3de_home.join(MANIFEST_FILE));

        Ok(Self {
            o3de_home,
            manifest_path,
            log_level: settings.log_level,
        })
    }

    /// A context rooted at `home`, with the default manifest location.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let o3de_home = home.into();
        Self {
            manifest_path: o3de_home.join(MANIFEST_FILE),
            o3de_home,
            log_level: None,
        }
    }
}

fn default_o3de_home() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_HOME_DIR))
        .ok_or_else(|| anyhow::anyhow!("Cannot determine the user home directory"))
}
