use anyhow::{Context as _, Result};
use clap::{ArgAction, Args};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::resolve_object;
use crate::config::Context;
use crate::manifest::ObjectKind;
use crate::registry::{CommandRegistry, Fragment};

/// Folder inside a template holding the files to instantiate.
const TEMPLATE_CONTENT_DIR: &str = "Template";

#[derive(Args, Debug)]
pub struct CreateFromTemplateArgs {
    #[command(flatten)]
    template: TemplateSource,

    /// Folder to instantiate the template into
    #[arg(long, value_name = "DIR")]
    destination_path: PathBuf,

    /// Name substituted for ${Name} (default: the destination folder name)
    #[arg(long, value_name = "NAME")]
    destination_name: Option<String>,

    /// Extra placeholder replacement, may be repeated
    #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"], action = ArgAction::Append)]
    replace: Vec<String>,

    /// Write into a destination that already has content
    #[arg(long, short)]
    force: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct TemplateSource {
    /// Template root containing template.json
    #[arg(long, value_name = "DIR")]
    template_path: Option<PathBuf>,

    /// Name of a registered template
    #[arg(long, value_name = "NAME")]
    template_name: Option<String>,
}

pub fn add_args(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Fragment::new(
        "create-from-template",
        "Instantiate a template into a new folder",
        run,
    ))
}

fn run(args: &CreateFromTemplateArgs, ctx: &Context) -> Result<i32> {
    let template = resolve_object(
        ctx,
        ObjectKind::Template,
        args.template.template_name.as_deref(),
        args.template.template_path.as_deref(),
    )?;
    let source = template.join(TEMPLATE_CONTENT_DIR);
    if !source.is_dir() {
        eprintln!("Template has no {TEMPLATE_CONTENT_DIR} folder: {}", template.display());
        return Ok(1);
    }

    let name = match &args.destination_name {
        Some(name) => name.clone(),
        None => args
            .destination_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Cannot derive a name from {}",
                    args.destination_path.display()
                )
            })?,
    };
    if !is_valid_name(&name) {
        eprintln!("Invalid name '{name}': use letters, digits, '_' or '-', starting with a letter");
        return Ok(1);
    }

    if args.replace.chunks_exact(2).any(|pair| pair[0].is_empty()) {
        eprintln!("Replacement keys must not be empty");
        return Ok(1);
    }

    if has_content(&args.destination_path)? && !args.force {
        eprintln!(
            "Destination {} is not empty, use --force to write into it",
            args.destination_path.display()
        );
        return Ok(1);
    }

    let replacements = replacements(&name, &args.replace);
    let written = instantiate(&source, &args.destination_path, &replacements)?;
    println!(
        "Created '{name}' in {} ({written} files)",
        args.destination_path.display()
    );
    Ok(0)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn has_content(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    let mut entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    Ok(entries.next().is_some())
}

fn replacements(name: &str, extra: &[String]) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("${Name}".to_string(), name.to_string()),
        ("${NameLower}".to_string(), name.to_lowercase()),
        ("${NameUpper}".to_string(), name.to_uppercase()),
    ];
    pairs.extend(
        extra
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone())),
    );
    pairs
}

fn substitute(text: &str, replacements: &[(String, String)]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Copy `source` into `destination`, substituting placeholders. Returns the number of files written.
fn instantiate(source: &Path, destination: &Path, replacements: &[(String, String)]) -> Result<usize> {
    let mut written = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source)?;
        let target = destination.join(substitute(&relative.to_string_lossy(), replacements));

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        let contents = match String::from_utf8(bytes) {
            Ok(text) => substitute(&text, replacements).into_bytes(),
            Err(binary) => binary.into_bytes(),
        };
        fs::write(&target, contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::debug!(file = %target.display(), "instantiated");
        written += 1;
    }
    Ok(written)
}
