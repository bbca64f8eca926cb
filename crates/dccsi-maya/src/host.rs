use std::collections::HashSet;

/// Failure to import a module from the host application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("cannot import '{module}': not running inside a host application")]
    NotEmbedded { module: String },
    #[error("cannot import '{module}': not provided by {host}")]
    ModuleNotFound { host: String, module: String },
}

/// The scripting surface of a host application.
pub trait HostApi {
    /// Host name used in diagnostics.
    fn name(&self) -> &str;

    /// Import `module` through the host, e.g. `maya.cmds`.
    fn import(&self, module: &str) -> Result<(), ImportError>;
}

impl<T: HostApi + ?Sized> HostApi for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn import(&self, module: &str) -> Result<(), ImportError> {
        (**self).import(module)
    }
}

impl<T: HostApi + ?Sized> HostApi for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn import(&self, module: &str) -> Result<(), ImportError> {
        (**self).import(module)
    }
}

/// Host used outside any application: every import fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl HostApi for Detached {
    fn name(&self) -> &str {
        "standalone"
    }

    fn import(&self, module: &str) -> Result<(), ImportError> {
        Err(ImportError::NotEmbedded {
            module: module.to_string(),
        })
    }
}

/// A host application that exposes a fixed set of modules.
#[derive(Debug, Clone)]
pub struct EmbeddedHost {
    name: String,
    modules: HashSet<String>,
}

impl EmbeddedHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules: HashSet::new(),
        }
    }

    /// Expose `module` to importers.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.insert(module.into());
        self
    }

    pub fn with_modules<I, S>(self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        modules
            .into_iter()
            .fold(self, |host, module| host.with_module(module))
    }

    pub fn provides(&self, module: &str) -> bool {
        self.modules.contains(module)
    }
}

impl HostApi for EmbeddedHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn import(&self, module: &str) -> Result<(), ImportError> {
        if self.provides(module) {
            Ok(())
        } else {
            Err(ImportError::ModuleNotFound {
                host: self.name.clone(),
                module: module.to_string(),
            })
        }
    }
}
