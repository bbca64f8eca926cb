use anyhow::Result;

use super::enable_gem::{GemProjectArgs, update_gem_names};
use crate::config::Context;
use crate::registry::{CommandRegistry, Fragment};

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "disable-gem",
        "Disable a gem in a project",
        run,
    ))
}

fn run(args: &GemProjectArgs, ctx: &Context) -> Result<i32> {
    let gem = args.gem_name()?;
    let project = args.project_path(ctx)?;
    update_gem_names(&project, |names| {
        let before = names.len();
        names.retain(|name| name != &gem);
        if names.len() == before {
            tracing::info!("gem '{gem}' is not enabled");
        }
        names.len() != before
    })?;
    println!("Disabled gem '{gem}' in {}", project.display());
    Ok(0)
}
