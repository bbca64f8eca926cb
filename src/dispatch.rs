use anyhow::Result;
use std::ffi::OsString;

use crate::commands;
use crate::config::Context;
use crate::logging;
use crate::registry::CommandRegistry;

/// Exit status used when a handler fails instead of returning a status.
pub const HANDLER_FAILURE: i32 = 1;

/// Exit status when invoked without any arguments.
pub const USAGE_EXIT: i32 = 1;

/// Parse `argv`, run the selected subcommand and return its exit status.
///
/// `argv` includes the program name. Nothing here exits the process.
pub fn dispatch<I, T>(registry: &CommandRegistry, argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    if argv.len() <= 1 {
        let mut command = registry.command();
        eprintln!("{}", command.render_help());
        return USAGE_EXIT;
    }

    let invocation = match registry.parse(argv) {
        Ok(invocation) => invocation,
        Err(err) => {
            // clap routes help/version to stdout and real errors to stderr
            let _ = err.print();
            return err.exit_code();
        }
    };

    let globals = invocation.globals();
    let ctx = match Context::resolve(globals) {
        Ok(ctx) => ctx,
        Err(e) => {
            logging::init(globals.verbose, None);
            tracing::debug!("failed to resolve settings: {e:#}");
            eprintln!("Error: {e:#}");
            return HANDLER_FAILURE;
        }
    };
    logging::init(globals.verbose, ctx.log_level.as_deref());

    tracing::debug!(
        subcommand = invocation.name(),
        manifest = %ctx.manifest_path.display(),
        "dispatching"
    );
    match invocation.run(&ctx) {
        Ok(code) => {
            tracing::debug!(subcommand = invocation.name(), code, "subcommand finished");
            code
        }
        Err(e) => {
            tracing::debug!(subcommand = invocation.name(), "subcommand failed: {e:#}");
            eprintln!("Error: {e:#}");
            HANDLER_FAILURE
        }
    }
}

/// Register every built-in subcommand.
pub fn builtin_registry() -> Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    commands::add_args(&mut registry)?;
    Ok(registry)
}

/// Entry point behaviour of the `o3de` binary.
pub fn run() -> i32 {
    match builtin_registry() {
        Ok(registry) => dispatch(&registry, std::env::args_os()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            HANDLER_FAILURE
        }
    }
}
