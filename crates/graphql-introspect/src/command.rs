use crate::Cli;
use crate::CommandResult;

/// A subcommand of `graphql-introspect`. Failures are reported through the
/// returned [`CommandResult`] rather than propagated, so each command decides
/// how its errors are printed.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
