//! Input line parsing.

/// A command name with its arguments, all case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a raw input line into a command and its arguments.
///
/// Tokens are separated by whitespace and lowercased, so contact names are
/// stored and looked up in lowercase. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace().map(str::to_lowercase);
    let command = tokens.next()?;
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
