//! Built-in subcommands. Each module registers itself through its own `add_args`.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::config::Context;
use crate::manifest::{Manifest, ObjectKind};
use crate::registry::CommandRegistry;

pub mod disable_gem;
pub mod enable_gem;
pub mod engine_template;
pub mod get_registration;
pub mod global_project;
pub mod print_registration;
pub mod project_properties;
pub mod register;
pub mod sha256;

/// Register the built-in subcommands in help-listing order.
pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    register::add_args(registry)?;
    global_project::add_args(registry)?;
    engine_template::add_args(registry)?;
    print_registration::add_args(registry)?;
    get_registration::add_args(registry)?;
    enable_gem::add_args(registry)?;
    disable_gem::add_args(registry)?;
    project_properties::add_args(registry)?;
    sha256::add_args(registry)?;
    Ok(())
}

/// Resolve an object given either its registered name or a directory path.
pub(crate) fn resolve_object(
    ctx: &Context,
    kind: ObjectKind,
    name: Option<&str>,
    path: Option<&Path>,
) -> Result<PathBuf> {
    match (name, path) {
        (_, Some(path)) => canonical(path),
        (Some(name), None) => Manifest::load(&ctx.manifest_path)?
            .find_by_name(kind, name)
            .ok_or_else(|| anyhow::anyhow!("No registered {kind} named '{name}'")),
        (None, None) => Err(anyhow::anyhow!("Either a {kind} name or path is required")),
    }
}

pub(crate) fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))
}
