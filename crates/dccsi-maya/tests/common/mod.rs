#![allow(dead_code)]

use dccsi_maya::{EmbeddedHost, HostApi, ImportError, NATIVE_APIS};
use std::cell::RefCell;

/// Host wrapper that records every import attempt.
pub struct RecordingHost<H> {
    inner: H,
    imports: RefCell<Vec<String>>,
}

impl<H: HostApi> RecordingHost<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            imports: RefCell::new(Vec::new()),
        }
    }

    pub fn imports(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }

    /// Import attempts made by the self-test, as opposed to native API checks.
    pub fn self_test_imports(&self) -> Vec<String> {
        self.imports()
            .into_iter()
            .filter(|module| module.starts_with("azpy.maya."))
            .collect()
    }
}

impl<H: HostApi> HostApi for RecordingHost<H> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn import(&self, module: &str) -> Result<(), ImportError> {
        self.imports.borrow_mut().push(module.to_string());
        self.inner.import(module)
    }
}

/// A Maya session exposing the native API only.
pub fn maya() -> EmbeddedHost {
    EmbeddedHost::new("maya").with_modules(NATIVE_APIS)
}

/// A Maya session where the package's submodules also import.
pub fn maya_with_submodules() -> EmbeddedHost {
    maya().with_modules([
        "azpy.maya.callbacks",
        "azpy.maya.helpers",
        "azpy.maya.toolbits",
    ])
}
