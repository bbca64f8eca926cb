use crate::env::env_bool;
use crate::host::{HostApi, ImportError};

pub const PACKAGE_NAME: &str = "azpy.maya";

/// Environment flag enabling the import self-test.
pub const ENVAR_DCCSI_DEV_MODE: &str = "DCCSI_DEV_MODE";

/// Native entry points that must import before host-dependent submodules are usable.
pub const NATIVE_APIS: [&str; 2] = ["maya.cmds", "maya.api.OpenMaya"];

/// Submodules declared once the native API is confirmed.
pub const HOST_SUBMODULES: [&str; 3] = ["callbacks", "helpers", "toolbits"];

/// Maya tooling package whose host-dependent parts load only on request.
///
/// Creating the package never touches the native API, so it is safe outside Maya.
/// [`MayaPackage::init`] imports the API and declares the submodules that need it.
pub struct MayaPackage<H> {
    host: H,
    dev_mode: bool,
    declared: Vec<&'static str>,
}

impl<H: HostApi> MayaPackage<H> {
    /// Create the package, reading the dev-mode flag from `DCCSI_DEV_MODE`.
    pub fn load(host: H) -> Self {
        Self::with_dev_mode(host, env_bool(ENVAR_DCCSI_DEV_MODE, false))
    }

    pub fn with_dev_mode(host: H, dev_mode: bool) -> Self {
        tracing::debug!("loading {PACKAGE_NAME} (host: {})", host.name());
        let package = Self {
            host,
            dev_mode,
            declared: Vec::new(),
        };
        if package.dev_mode {
            package.test_imports();
        }
        package
    }

    /// Import the native Maya API and declare the submodules that depend on it.
    ///
    /// Calling this again re-checks the host but never declares a name twice.
    pub fn init(&mut self) -> Result<(), ImportError> {
        for api in NATIVE_APIS {
            self.host.import(api)?;
        }

        for name in HOST_SUBMODULES {
            if !self.declared.contains(&name) {
                self.declared.push(name);
            }
        }
        tracing::debug!("{PACKAGE_NAME} declared {:?}", self.declared);

        if self.dev_mode {
            self.test_imports();
        }
        Ok(())
    }

    /// Try importing every declared submodule, logging failures. Returns the failure count.
    pub fn test_imports(&self) -> usize {
        tracing::debug!("testing imports from {PACKAGE_NAME}");
        self.declared
            .iter()
            .map(|name| format!("{PACKAGE_NAME}.{name}"))
            .filter(|module| match self.host.import(module) {
                Ok(()) => {
                    tracing::debug!("imported {module}");
                    false
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    true
                }
            })
            .count()
    }

    /// Submodules that are currently safe to import
    pub fn declared(&self) -> &[&'static str] {
        &self.declared
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
