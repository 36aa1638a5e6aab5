mod inspect;
mod parse_value;
mod validate;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;
use parse_value::ParseValueCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-introspect")]
pub(crate) enum CommandEnum {
    /// Print the types and directives of an introspection result.
    Inspect(Box<InspectCmd>),

    /// Parse a single GraphQL literal value and print its tree.
    ParseValue(Box<ParseValueCmd>),

    /// Build a type registry from each introspection JSON file found.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    /// The subcommand name as typed on the command line.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Inspect(_) => "inspect",
            Self::ParseValue(_) => "parse-value",
            Self::Validate(_) => "validate",
        }
    }

    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::ParseValue(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
