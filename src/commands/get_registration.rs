use anyhow::Result;
use clap::Args;

use crate::config::Context;
use crate::manifest::{Manifest, ObjectKind};
use crate::registry::{CommandRegistry, Fragment};

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GetRegisteredArgs {
    /// Name of a registered engine
    #[arg(long, value_name = "NAME")]
    engine_name: Option<String>,

    /// Name of a registered project
    #[arg(long, value_name = "NAME")]
    project_name: Option<String>,

    /// Name of a registered gem
    #[arg(long, value_name = "NAME")]
    gem_name: Option<String>,

    /// Name of a registered template
    #[arg(long, value_name = "NAME")]
    template_name: Option<String>,

    /// Name of a registered restricted folder
    #[arg(long, value_name = "NAME")]
    restricted_name: Option<String>,
}

impl GetRegisteredArgs {
    fn query(&self) -> Option<(ObjectKind, &str)> {
        [
            (ObjectKind::Engine, &self.engine_name),
            (ObjectKind::Project, &self.project_name),
            (ObjectKind::Gem, &self.gem_name),
            (ObjectKind::Template, &self.template_name),
            (ObjectKind::Restricted, &self.restricted_name),
        ]
        .into_iter()
        .find_map(|(kind, name)| name.as_deref().map(|name| (kind, name)))
    }
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "get-registered",
        "Print the path of a registered object by name",
        run,
    ))
}

fn run(args: &GetRegisteredArgs, ctx: &Context) -> Result<i32> {
    let Some((kind, name)) = args.query() else {
        return Err(anyhow::anyhow!("No name given"));
    };

    match Manifest::load(&ctx.manifest_path)?.find_by_name(kind, name) {
        Some(path) => {
            println!("{}", path.display());
            Ok(0)
        }
        None => {
            eprintln!("No registered {kind} named '{name}'");
            Ok(1)
        }
    }
}
