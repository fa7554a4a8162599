// Non-SQL statements like .exit are called “meta-commands”.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Constants,
    Unrecognized(String),
}

impl MetaCommand {
    /// Returns `None` when `input` is not a meta-command at all.
    pub fn parse(input: &str) -> Option<MetaCommand> {
        match input {
            ".exit" => Some(MetaCommand::Exit),
            ".constants" => Some(MetaCommand::Constants),
            _ if input.starts_with('.') => Some(MetaCommand::Unrecognized(input.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meta_commands() {
        assert_eq!(MetaCommand::parse(".exit"), Some(MetaCommand::Exit));
        assert_eq!(MetaCommand::parse(".constants"), Some(MetaCommand::Constants));
        assert_eq!(
            MetaCommand::parse(".tables"),
            Some(MetaCommand::Unrecognized(".tables".into()))
        );
    }

    #[test]
    fn test_statements_are_not_meta_commands() {
        assert_eq!(MetaCommand::parse("select"), None);
        assert_eq!(MetaCommand::parse("insert 1 a b"), None);
        assert_eq!(MetaCommand::parse(""), None);
    }
}
