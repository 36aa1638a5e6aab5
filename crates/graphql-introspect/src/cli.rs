use clap::CommandFactory;
use crate::commands;

/// Inspect and validate GraphQL introspection results.
#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-introspect",
    version,
    about = "Inspect and validate GraphQL introspection results.",
    long_about = "Builds type registries from GraphQL introspection JSON \
        (the `__schema` query result, with or without a `data` wrapper) and \
        parses the literal default values they carry.",
    after_help = "Set LOG_LEVEL (error, warn, info, debug, trace) to control \
        log output on stderr.\n\n\
        Examples:\n  \
        graphql-introspect validate ./schemas\n  \
        graphql-introspect inspect schema.json User\n  \
        graphql-introspect parse-value '{limit: 10, roles: [ADMIN]}'",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable debug logging. Overrides LOG_LEVEL.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
