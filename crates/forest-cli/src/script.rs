//! Line-oriented command scripts shared by both harnesses.

use crate::error::CliError;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// 1-based line number in the script.
    pub line: usize,
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl Command<'_> {
    pub fn no_args(&self) -> Result<(), CliError> {
        if self.args.is_empty() {
            Ok(())
        } else {
            Err(self.arity("no arguments"))
        }
    }

    /// Exactly one numeric argument.
    pub fn one_number(&self) -> Result<i64, CliError> {
        match self.args.as_slice() {
            [token] => parse_number(self.line, token),
            _ => Err(self.arity("one number")),
        }
    }

    /// One or more numeric arguments.
    pub fn numbers(&self) -> Result<Vec<i64>, CliError> {
        if self.args.is_empty() {
            return Err(self.arity("at least one number"));
        }
        self.args
            .iter()
            .map(|token| parse_number(self.line, token))
            .collect()
    }

    /// Zero or one count argument, defaulting to `1`.
    pub fn count(&self) -> Result<usize, CliError> {
        match self.args.as_slice() {
            [] => Ok(1),
            [token] => token.parse().map_err(|source| CliError::InvalidNumber {
                line: self.line,
                token: token.to_string(),
                source,
            }),
            _ => Err(self.arity("at most one count")),
        }
    }

    pub fn unknown(&self) -> CliError {
        CliError::UnknownCommand {
            line: self.line,
            command: self.name.to_string(),
        }
    }

    fn arity(&self, expected: &'static str) -> CliError {
        CliError::BadArity {
            line: self.line,
            command: self.name.to_string(),
            expected,
        }
    }
}

fn parse_number(line: usize, token: &str) -> Result<i64, CliError> {
    token.parse().map_err(|source| CliError::InvalidNumber {
        line,
        token: token.to_string(),
        source,
    })
}

/// Splits a script into commands, skipping blank lines and `#` comments.
pub fn parse(input: &str) -> impl Iterator<Item = Command<'_>> {
    input.lines().enumerate().filter_map(|(i, raw)| {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }
        let mut words = text.split_whitespace();
        let name = words.next()?;
        Some(Command {
            line: i + 1,
            name,
            args: words.collect(),
        })
    })
}
