//! O3DE command line
//!
//! A single `o3de` entry point composed from independently owned
//! subcommands for registration, templating, gem and project management.

pub use config::{Context, GlobalArgs, Settings};
pub use dispatch::{HANDLER_FAILURE, USAGE_EXIT, builtin_registry, dispatch, run};
pub use manifest::{Manifest, ObjectKind};
pub use registry::{CommandFragment, CommandRegistry, Fragment, Invocation};

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod manifest;
pub mod registry;
