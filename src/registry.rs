use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::ffi::OsString;

use crate::config::{Context, GlobalArgs};

/// A subcommand that owns its flags and its handler.
pub trait CommandFragment {
    /// Name the subcommand is invoked by.
    fn name(&self) -> &str;

    /// Grammar for this subcommand, named after [`CommandFragment::name`].
    fn command(&self) -> Command;

    /// Run the subcommand and return the process exit status.
    fn run(&self, matches: &ArgMatches, ctx: &Context) -> Result<i32>;
}

type Handler<A> = Box<dyn Fn(&A, &Context) -> Result<i32>>;

/// A [`CommandFragment`] built from a clap `Args` struct and a handler over it.
pub struct Fragment<A> {
    name: &'static str,
    about: &'static str,
    handler: Handler<A>,
}

impl<A: Args + FromArgMatches> Fragment<A> {
    pub fn new<F>(name: &'static str, about: &'static str, handler: F) -> Self
    where
        F: Fn(&A, &Context) -> Result<i32> + 'static,
    {
        Self {
            name,
            about,
            handler: Box::new(handler),
        }
    }
}

impl<A: Args + FromArgMatches> CommandFragment for Fragment<A> {
    fn name(&self) -> &str {
        self.name
    }

    fn command(&self) -> Command {
        A::augment_args(Command::new(self.name).about(self.about))
    }

    fn run(&self, matches: &ArgMatches, ctx: &Context) -> Result<i32> {
        let args = A::from_arg_matches(matches)?;
        (self.handler)(&args, ctx)
    }
}

/// Ordered set of subcommands making up the command line grammar.
#[derive(Default)]
pub struct CommandRegistry {
    fragments: Vec<Box<dyn CommandFragment>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subcommand. Names must be unique across the registry.
    pub fn register<F>(&mut self, fragment: F) -> Result<()>
    where
        F: CommandFragment + 'static,
    {
        if self.get(fragment.name()).is_some() {
            return Err(anyhow::anyhow!(
                "Duplicate subcommand name: '{}'",
                fragment.name()
            ));
        }
        tracing::debug!(name = fragment.name(), "registered subcommand");
        self.fragments.push(Box::new(fragment));
        Ok(())
    }

    /// Registered subcommand names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|fragment| fragment.name())
    }

    pub fn get(&self, name: &str) -> Option<&dyn CommandFragment> {
        self.fragments
            .iter()
            .find(|fragment| fragment.name() == name)
            .map(|fragment| fragment.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Build the top-level command with one subcommand per fragment.
    pub fn command(&self) -> Command {
        let command = GlobalArgs::augment_args(
            Command::new("o3de")
                .about("Register and manage O3DE engines, projects, gems and templates")
                .version(env!("CARGO_PKG_VERSION"))
                .subcommand_required(true),
        );
        self.fragments
            .iter()
            .fold(command, |command, fragment| {
                command.subcommand(fragment.command())
            })
    }

    /// Parse `argv` (including the program name) into an [`Invocation`].
    pub fn parse<I, T>(&self, argv: I) -> Result<Invocation<'_>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut matches = self.command().try_get_matches_from(argv)?;
        let globals = GlobalArgs::from_arg_matches_mut(&mut matches)?;
        let Some((name, sub_matches)) = matches.remove_subcommand() else {
            return Err(self
                .command()
                .error(clap::error::ErrorKind::MissingSubcommand, "a subcommand is required"));
        };
        let Some(fragment) = self.get(&name) else {
            return Err(self.command().error(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unrecognized subcommand '{name}'"),
            ));
        };
        Ok(Invocation {
            name,
            matches: sub_matches,
            globals,
            fragment,
        })
    }
}

/// A parsed command line bound to exactly one subcommand handler.
pub struct Invocation<'r> {
    name: String,
    matches: ArgMatches,
    globals: GlobalArgs,
    fragment: &'r dyn CommandFragment,
}

impl Invocation<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn globals(&self) -> &GlobalArgs {
        &self.globals
    }

    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }

    /// Invoke the selected handler.
    pub fn run(&self, ctx: &Context) -> Result<i32> {
        self.fragment.run(&self.matches, ctx)
    }
}
