use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_literal_parser::parse_default_value;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseValueCmd {
    #[arg(
        help="Print the parsed value as JSON instead of as a debug tree.",
        long,
    )]
    json: bool,

    #[arg(
        help="A single GraphQL literal, such as `{name: \"Hello\", score: 1.0}`.",
        name="LITERAL",
    )]
    literal: String,
}

#[inherent::inherent]
impl RunnableCommand for ParseValueCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let value = match parse_default_value(&self.literal) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Failed to parse literal: {e:?}");
                return CommandResult::stderr(format_args!(
                    "{} {e}\n  {}\n  {}^",
                    output_utils::RED_X,
                    self.literal,
                    caret_padding(&self.literal, e.offset()),
                ));
            },
        };

        if !self.json {
            return CommandResult::stdout(format_args!("{value:#?}"));
        }
        match serde_json::to_string_pretty(&value) {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the parsed value: {e}",
                output_utils::RED_X,
            )),
        }
    }
}

/// Spaces that line a caret up under the char at byte `offset` of `literal`.
fn caret_padding(literal: &str, offset: usize) -> String {
    let prefix = literal.get(..offset).unwrap_or(literal);
    prefix
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
