//! The user manifest and the JSON descriptors of registered objects.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kinds of objects that can be registered in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Engine,
    Project,
    Gem,
    Template,
    Restricted,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Engine,
        ObjectKind::Project,
        ObjectKind::Gem,
        ObjectKind::Template,
        ObjectKind::Restricted,
    ];

    /// Descriptor file expected at the root of an object's directory.
    pub fn descriptor_file(self) -> &'static str {
        match self {
            ObjectKind::Engine => "engine.json",
            ObjectKind::Project => "project.json",
            ObjectKind::Gem => "gem.json",
            ObjectKind::Template => "template.json",
            ObjectKind::Restricted => "restricted.json",
        }
    }

    /// Key holding the object's name inside its descriptor.
    pub fn name_key(self) -> &'static str {
        match self {
            ObjectKind::Engine => "engine_name",
            ObjectKind::Project => "project_name",
            ObjectKind::Gem => "gem_name",
            ObjectKind::Template => "template_name",
            ObjectKind::Restricted => "restricted_name",
        }
    }

    /// Key of the manifest list holding paths of this kind.
    pub fn manifest_key(self) -> &'static str {
        match self {
            ObjectKind::Engine => "engines",
            ObjectKind::Project => "projects",
            ObjectKind::Gem => "gems",
            ObjectKind::Template => "templates",
            ObjectKind::Restricted => "restricted",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::Engine => "engine",
            ObjectKind::Project => "project",
            ObjectKind::Gem => "gem",
            ObjectKind::Template => "template",
            ObjectKind::Restricted => "restricted",
        };
        f.write_str(label)
    }
}

/// Registered object paths, keyed by kind. Keys this tool does not know are kept as-is.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub engines: Vec<PathBuf>,
    #[serde(default)]
    pub projects: Vec<PathBuf>,
    #[serde(default)]
    pub gems: Vec<PathBuf>,
    #[serde(default)]
    pub templates: Vec<PathBuf>,
    #[serde(default)]
    pub restricted: Vec<PathBuf>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Load the manifest, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no manifest yet, starting empty");
            return Ok(Self::default());
        }
        let value = read_json(path)?;
        serde_json::from_value(value)
            .with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let value = serde_json::to_value(self)?;
        write_json(path, &value)
    }

    pub fn paths(&self, kind: ObjectKind) -> &[PathBuf] {
        match kind {
            ObjectKind::Engine => &self.engines,
            ObjectKind::Project => &self.projects,
            ObjectKind::Gem => &self.gems,
            ObjectKind::Template => &self.templates,
            ObjectKind::Restricted => &self.restricted,
        }
    }

    fn paths_mut(&mut self, kind: ObjectKind) -> &mut Vec<PathBuf> {
        match kind {
            ObjectKind::Engine => &mut self.engines,
            ObjectKind::Project => &mut self.projects,
            ObjectKind::Gem => &mut self.gems,
            ObjectKind::Template => &mut self.templates,
            ObjectKind::Restricted => &mut self.restricted,
        }
    }

    /// Add `path` to the list for `kind`. Returns false if it was already there.
    pub fn add(&mut self, kind: ObjectKind, path: PathBuf) -> bool {
        let paths = self.paths_mut(kind);
        if paths.contains(&path) {
            return false;
        }
        paths.push(path);
        true
    }

    /// Remove `path` from the list for `kind`. Returns false if it was not registered.
    pub fn remove(&mut self, kind: ObjectKind, path: &Path) -> bool {
        let paths = self.paths_mut(kind);
        let before = paths.len();
        paths.retain(|registered| registered != path);
        paths.len() != before
    }

    /// Find the registered object of `kind` whose descriptor carries `name`.
    pub fn find_by_name(&self, kind: ObjectKind, name: &str) -> Option<PathBuf> {
        self.paths(kind)
            .iter()
            .find(|path| match descriptor_name(kind, path) {
                Ok(found) => found == name,
                Err(e) => {
                    tracing::warn!("skipping registered {kind} {}: {e:#}", path.display());
                    false
                }
            })
            .cloned()
    }
}

/// Read the name an object declares in its descriptor.
pub fn descriptor_name(kind: ObjectKind, dir: &Path) -> Result<String> {
    let descriptor = dir.join(kind.descriptor_file());
    let value = read_json(&descriptor)?;
    value
        .get(kind.name_key())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "{} has no '{}' string",
                descriptor.display(),
                kind.name_key()
            )
        })
}

pub fn read_json(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write `value` with four-space indentation and a trailing newline.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))
}
