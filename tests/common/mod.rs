#![allow(dead_code)]

use o3de_cli::{Manifest, ObjectKind, builtin_registry, dispatch};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding an o3de home and any objects a test creates.
pub struct TestHome(TempDir);

impl TestHome {
    pub fn new() -> Self {
        TestHome(tempfile::tempdir().unwrap())
    }

    pub fn root(&self) -> PathBuf {
        self.0.path().canonicalize().unwrap()
    }

    pub fn o3de_home(&self) -> PathBuf {
        self.root().join(".o3de")
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::load(&self.o3de_home().join("o3de_manifest.json")).unwrap()
    }

    /// Dispatch the built-in commands with this home, returning the exit status.
    pub fn run(&self, args: &[&str]) -> i32 {
        let registry = builtin_registry().unwrap();
        let home = self.o3de_home();
        let mut argv = vec![
            "o3de".to_string(),
            "--o3de-home".to_string(),
            home.to_string_lossy().into_owned(),
        ];
        argv.extend(args.iter().map(|arg| arg.to_string()));
        dispatch(&registry, argv)
    }

    /// Create a folder for `kind` whose descriptor declares `name`.
    pub fn create_object(&self, kind: ObjectKind, name: &str) -> PathBuf {
        self.create_object_with(kind, name, json!({}))
    }

    pub fn create_object_with(&self, kind: ObjectKind, name: &str, extra: Value) -> PathBuf {
        let dir = self.root().join(format!("{kind}s")).join(name);
        fs::create_dir_all(&dir).unwrap();
        let mut fields = serde_json::Map::new();
        fields.insert(kind.name_key().to_string(), json!(name));
        if let Value::Object(extra) = extra {
            fields.extend(extra);
        }
        write_json(&dir.join(kind.descriptor_file()), &Value::Object(fields));
        dir
    }

    /// Create and register an object through the `register` command.
    pub fn register_object(&self, kind: ObjectKind, name: &str) -> PathBuf {
        let dir = self.create_object(kind, name);
        let flag = format!("--{kind}-path");
        assert_eq!(self.run(&["register", &flag, path_arg(&dir)]), 0);
        dir
    }
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}
