use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;

use super::resolve_object;
use crate::config::Context;
use crate::manifest::{ObjectKind, read_json, write_json};
use crate::registry::{CommandRegistry, Fragment};

const BOOTSTRAP_SETREG: &str = "Registry/bootstrap.setreg";
const BOOTSTRAP_KEYS: [&str; 3] = ["Amazon", "AzCore", "Bootstrap"];

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GlobalProjectArgs {
    /// Name of a registered project
    #[arg(long, value_name = "NAME")]
    project_name: Option<String>,

    /// Project root directory
    #[arg(long, value_name = "DIR")]
    project_path: Option<PathBuf>,
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "set-global-project",
        "Set the project used when no project is given on the command line",
        run,
    ))
}

fn run(args: &GlobalProjectArgs, ctx: &Context) -> Result<i32> {
    let project = resolve_object(
        ctx,
        ObjectKind::Project,
        args.project_name.as_deref(),
        args.project_path.as_deref(),
    )?;
    if !project.join(ObjectKind::Project.descriptor_file()).is_file() {
        eprintln!("{} is not a project folder", project.display());
        return Ok(1);
    }

    let setreg = ctx.o3de_home.join(BOOTSTRAP_SETREG);
    let mut root = if setreg.is_file() {
        read_json(&setreg)?
    } else {
        Value::Object(Map::new())
    };

    let bootstrap = BOOTSTRAP_KEYS
        .iter()
        .try_fold(&mut root, |node, key| {
            let Value::Object(map) = node else {
                return Err(anyhow::anyhow!(
                    "{} has a non-object value on the path to '{key}'",
                    setreg.display()
                ));
            };
            Ok(map
                .entry(*key)
                .or_insert_with(|| Value::Object(Map::new())))
        })?;
    let Value::Object(bootstrap) = bootstrap else {
        return Err(anyhow::anyhow!(
            "{} has a non-object Bootstrap entry",
            setreg.display()
        ));
    };
    bootstrap.insert(
        "project_path".to_string(),
        Value::String(project.to_string_lossy().into_owned()),
    );

    write_json(&setreg, &root)?;
    println!("Global project set to {}", project.display());
    Ok(0)
}
