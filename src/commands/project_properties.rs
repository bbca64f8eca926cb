use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;

use super::resolve_object;
use crate::config::Context;
use crate::manifest::{ObjectKind, read_json, write_json};
use crate::registry::{CommandRegistry, Fragment};

#[derive(Args, Debug)]
pub struct ProjectPropertiesArgs {
    #[command(flatten)]
    project: ProjectSelector,

    /// New project name
    #[arg(long, value_name = "NAME")]
    project_new_name: Option<String>,

    /// Origin of the project, such as a URL or author
    #[arg(long, value_name = "ORIGIN")]
    project_origin: Option<String>,

    /// Display name shown in tools
    #[arg(long, value_name = "NAME")]
    project_display: Option<String>,

    /// Short description
    #[arg(long, value_name = "TEXT")]
    project_summary: Option<String>,

    /// Path of the project icon, relative to the project root
    #[arg(long, value_name = "PATH")]
    project_icon: Option<String>,

    /// Tags to add
    #[arg(long, num_args = 1.., value_name = "TAG")]
    add_tags: Vec<String>,

    /// Tags to remove
    #[arg(long, num_args = 1.., value_name = "TAG")]
    delete_tags: Vec<String>,

    /// Replace all tags with these
    #[arg(long, num_args = 1.., value_name = "TAG")]
    replace_tags: Option<Vec<String>>,
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

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "edit-project-properties",
        "Edit the properties stored in a project's project.json",
        run,
    ))
}

fn run(args: &ProjectPropertiesArgs, ctx: &Context) -> Result<i32> {
    let project = resolve_object(
        ctx,
        ObjectKind::Project,
        args.project.project_name.as_deref(),
        args.project.project_path.as_deref(),
    )?;
    let descriptor = project.join(ObjectKind::Project.descriptor_file());
    let mut json = read_json(&descriptor)?;
    let Value::Object(fields) = &mut json else {
        return Err(anyhow::anyhow!("{} is not a JSON object", descriptor.display()));
    };

    let changed = apply(args, fields)?;
    if changed {
        write_json(&descriptor, &json)?;
        println!("Updated {}", descriptor.display());
    } else {
        println!("Nothing to change in {}", descriptor.display());
    }
    Ok(0)
}

/// Apply the requested edits. Returns whether anything was requested.
fn apply(args: &ProjectPropertiesArgs, fields: &mut Map<String, Value>) -> Result<bool> {
    let mut changed = false;
    let scalars = [
        ("project_name", &args.project_new_name),
        ("origin", &args.project_origin),
        ("display_name", &args.project_display),
        ("summary", &args.project_summary),
        ("icon_path", &args.project_icon),
    ];
    for (key, value) in scalars {
        if let Some(value) = value {
            fields.insert(key.to_string(), Value::String(value.clone()));
            changed = true;
        }
    }

    let tag_edit = args.replace_tags.is_some()
        || !args.add_tags.is_empty()
        || !args.delete_tags.is_empty();
    if tag_edit {
        let mut tags: Vec<String> = match (&args.replace_tags, fields.get("user_tags")) {
            (Some(_), _) | (None, None) => Vec::new(),
            (None, Some(existing)) => serde_json::from_value(existing.clone())
                .map_err(|e| anyhow::anyhow!("Invalid 'user_tags': {e}"))?,
        };
        let additions = args.replace_tags.iter().flatten().chain(&args.add_tags);
        for tag in additions {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags.retain(|tag| !args.delete_tags.contains(tag));
        fields.insert("user_tags".to_string(), serde_json::to_value(tags)?);
        changed = true;
    }
    Ok(changed)
}
