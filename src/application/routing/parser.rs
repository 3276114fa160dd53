//! Command token extraction.

/// A message split into its command token and arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    /// Command name including the slash, without any `@botname` suffix.
    pub command: Option<String>,
    pub args: Vec<String>,
}

/// Parses the leading `/command[@botname]` token of a message.
#[derive(Debug, Clone)]
pub struct CommandParser {
    bot_name: String,
}

impl CommandParser {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    /// A command addressed to another bot counts as no command. Arguments
    /// are the remaining whitespace-separated tokens either way.
    pub fn parse(&self, text: &str) -> ParsedText {
        let mut tokens = text.split_whitespace();
        let Some(first) = tokens.next() else {
            return ParsedText::default();
        };
        if !first.starts_with('/') {
            return ParsedText::default();
        }

        let args = tokens.map(String::from).collect();
        let command = match first.split_once('@') {
            None => Some(first.to_string()),
            Some((name, target)) if target.eq_ignore_ascii_case(&self.bot_name) => {
                Some(name.to_string())
            }
            Some(_) => None,
        };
        ParsedText { command, args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CommandParser {
        CommandParser::new("SantaBot")
    }

    #[test]
    fn splits_command_and_arguments() {
        let parsed = parser().parse("/set_budget  20\tEUR");
        assert_eq!(parsed.command.as_deref(), Some("/set_budget"));
        assert_eq!(parsed.args, vec!["20", "EUR"]);
    }

    #[test]
    fn accepts_own_bot_suffix() {
        assert_eq!(
            parser().parse("/create@santabot").command.as_deref(),
            Some("/create")
        );
    }

    #[test]
    fn ignores_commands_for_other_bots() {
        assert_eq!(parser().parse("/create@OtherBot").command, None);
    }

    #[test]
    fn plain_text_has_no_command() {
        let parsed = parser().parse("hello /create");
        assert_eq!(parsed, ParsedText::default());
        assert_eq!(parser().parse("   "), ParsedText::default());
    }
}
