use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::canonical;
use crate::config::Context;
use crate::manifest::{Manifest, ObjectKind};
use crate::registry::{CommandRegistry, Fragment};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[command(flatten)]
    target: RegisterTarget,

    /// Remove the object from the manifest instead of adding it
    #[arg(long, short)]
    remove: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct RegisterTarget {
    /// Engine root containing engine.json
    #[arg(long, value_name = "DIR")]
    engine_path: Option<PathBuf>,

    /// Project root containing project.json
    #[arg(long, value_name = "DIR")]
    project_path: Option<PathBuf>,

    /// Gem root containing gem.json
    #[arg(long, value_name = "DIR")]
    gem_path: Option<PathBuf>,

    /// Template root containing template.json
    #[arg(long, value_name = "DIR")]
    template_path: Option<PathBuf>,

    /// Restricted root containing restricted.json
    #[arg(long, value_name = "DIR")]
    restricted_path: Option<PathBuf>,
}

impl RegisterTarget {
    fn kind_and_path(&self) -> Option<(ObjectKind, &Path)> {
        [
            (ObjectKind::Engine, &self.engine_path),
            (ObjectKind::Project, &self.project_path),
            (ObjectKind::Gem, &self.gem_path),
            (ObjectKind::Template, &self.template_path),
            (ObjectKind::Restricted, &self.restricted_path),
        ]
        .into_iter()
        .find_map(|(kind, path)| path.as_deref().map(|path| (kind, path)))
    }
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "register",
        "Register an engine, project, gem, template or restricted folder in the manifest",
        run,
    ))
}

fn run(args: &RegisterArgs, ctx: &Context) -> Result<i32> {
    let Some((kind, path)) = args.target.kind_and_path() else {
        return Err(anyhow::anyhow!("Nothing to register"));
    };
    let mut manifest = Manifest::load(&ctx.manifest_path)?;

    if args.remove {
        // A removed folder may no longer exist on disk.
        let path = canonical(path).unwrap_or_else(|_| path.to_path_buf());
        if manifest.remove(kind, &path) {
            manifest.save(&ctx.manifest_path)?;
            println!("Removed {kind} {}", path.display());
        } else {
            tracing::info!("{kind} {} was not registered", path.display());
        }
        return Ok(0);
    }

    let path = canonical(path)?;
    let descriptor = path.join(kind.descriptor_file());
    if !descriptor.is_file() {
        eprintln!(
            "Cannot register {kind}: {} not found",
            descriptor.display()
        );
        return Ok(1);
    }

    if manifest.add(kind, path.clone()) {
        manifest.save(&ctx.manifest_path)?;
        println!("Registered {kind} {}", path.display());
    } else {
        tracing::info!("{kind} {} is already registered", path.display());
    }
    Ok(0)
}
