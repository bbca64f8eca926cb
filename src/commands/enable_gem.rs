use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::resolve_object;
use crate::config::Context;
use crate::manifest::{ObjectKind, descriptor_name, read_json, write_json};
use crate::registry::{CommandRegistry, Fragment};

const GEM_NAMES_KEY: &str = "gem_names";

// Flags shared by `enable-gem` and `disable-gem`.
#[derive(Args, Debug)]
pub struct GemProjectArgs {
    #[command(flatten)]
    gem: GemSelector,

    #[command(flatten)]
    project: ProjectSelector,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct GemSelector {
    /// Name of the gem
    #[arg(long, value_name = "NAME")]
    gem_name: Option<String>,

    /// Gem root containing gem.json
    #[arg(long, value_name = "DIR")]
    gem_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ProjectSelector {
    /// Name of a registered project
    #[arg(long, value_name = "NAME")]
    project_name: Option<String>,

    /// Project root containing project.json
    #[arg(long, value_name = "DIR")]
    project_path: Option<PathBuf>,
}

impl GemProjectArgs {
    pub(crate) fn gem_name(&self) -> Result<String> {
        match (&self.gem.gem_name, &self.gem.gem_path) {
            (Some(name), _) => Ok(name.clone()),
            (None, Some(path)) => descriptor_name(ObjectKind::Gem, path),
            (None, None) => Err(anyhow::anyhow!("Either a gem name or path is required")),
        }
    }

    pub(crate) fn project_path(&self, ctx: &Context) -> Result<PathBuf> {
        resolve_object(
            ctx,
            ObjectKind::Project,
            self.project.project_name.as_deref(),
            self.project.project_path.as_deref(),
        )
    }
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "enable-gem",
        "Enable a gem in a project",
        run,
    ))
}

fn run(args: &GemProjectArgs, ctx: &Context) -> Result<i32> {
    let gem = args.gem_name()?;
    let project = args.project_path(ctx)?;
    update_gem_names(&project, |names| {
        if names.contains(&gem) {
            tracing::info!("gem '{gem}' is already enabled");
            false
        } else {
            names.push(gem.clone());
            true
        }
    })?;
    println!("Enabled gem '{gem}' in {}", project.display());
    Ok(0)
}

/// Apply `edit` to the project's gem list, writing project.json only when it reports a change.
pub(crate) fn update_gem_names<F>(project: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&mut Vec<String>) -> bool,
{
    let descriptor = project.join(ObjectKind::Project.descriptor_file());
    let mut json = read_json(&descriptor)?;
    let Value::Object(fields) = &mut json else {
        return Err(anyhow::anyhow!("{} is not a JSON object", descriptor.display()));
    };

    let mut names: Vec<String> = match fields.get(GEM_NAMES_KEY) {
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            anyhow::anyhow!("{} has an invalid '{GEM_NAMES_KEY}': {e}", descriptor.display())
        })?,
        None => Vec::new(),
    };

    if edit(&mut names) {
        fields.insert(GEM_NAMES_KEY.to_string(), serde_json::to_value(names)?);
        write_json(&descriptor, &json)?;
    }
    Ok(())
}
