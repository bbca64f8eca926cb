//! DCC Scripting Interface: Maya
//!
//! Lets tooling depend on the Maya package without requiring Maya at load
//! time. The native API is imported only when [`MayaPackage::init`] is called.

pub use env::{env_bool, parse_bool};
pub use host::{Detached, EmbeddedHost, HostApi, ImportError};
pub use package::{
    ENVAR_DCCSI_DEV_MODE, HOST_SUBMODULES, MayaPackage, NATIVE_APIS, PACKAGE_NAME,
};

pub mod env;
pub mod host;
pub mod package;
