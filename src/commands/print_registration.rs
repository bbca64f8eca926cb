use anyhow::Result;
use clap::Args;

use crate::config::Context;
use crate::manifest::{Manifest, ObjectKind};
use crate::registry::{CommandRegistry, Fragment};

#[derive(Args, Debug)]
pub struct RegisterShowArgs {
    /// Show registered engines
    #[arg(long)]
    engines: bool,

    /// Show registered projects
    #[arg(long)]
    projects: bool,

    /// Show registered gems
    #[arg(long)]
    gems: bool,

    /// Show registered templates
    #[arg(long)]
    templates: bool,

    /// Show registered restricted folders
    #[arg(long)]
    restricted: bool,

    /// Print the whole manifest as JSON
    #[arg(long, conflicts_with_all = ["engines", "projects", "gems", "templates", "restricted"])]
    json: bool,
}

impl RegisterShowArgs {
    fn selected(&self) -> Vec<ObjectKind> {
        let flags = [
            (ObjectKind::Engine, self.engines),
            (ObjectKind::Project, self.projects),
            (ObjectKind::Gem, self.gems),
            (ObjectKind::Template, self.templates),
            (ObjectKind::Restricted, self.restricted),
        ];
        let selected: Vec<_> = flags
            .iter()
            .filter(|(_, on)| *on)
            .map(|(kind, _)| *kind)
            .collect();
        if selected.is_empty() {
            ObjectKind::ALL.to_vec()
        } else {
            selected
        }
    }
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "register-show",
        "Show what is registered in the manifest",
        run,
    ))
}

fn run(args: &RegisterShowArgs, ctx: &Context) -> Result<i32> {
    let manifest = Manifest::load(&ctx.manifest_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(0);
    }

    for kind in args.selected() {
        println!("{}:", kind.manifest_key());
        let paths = manifest.paths(kind);
        if paths.is_empty() {
            println!("  (none)");
        }
        for path in paths {
            println!("  {}", path.display());
        }
    }
    Ok(0)
}
