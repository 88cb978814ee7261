use std::{fmt, str::FromStr};

use picks_model::ProductId;
use thiserror::Error;

/// One step of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoCommand {
    Next,
    Previous,
    /// Raw slide index, parsed the way the carousel parses `data-index`.
    GoTo(String),
    /// "Shop Now" on a product.
    Select(ProductId),
    /// Pretend the product's image failed to load.
    BrokenImage(ProductId),
    /// Dismiss every notification.
    Dismiss,
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for DemoCommand {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let argument = parts.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "next" | "n" => DemoCommand::Next,
            "prev" | "previous" | "p" => DemoCommand::Previous,
            "goto" | "g" => DemoCommand::GoTo(
                argument
                    .ok_or(CommandError::MissingArgument {
                        command: "goto",
                        expected: "a slide index",
                    })?
                    .to_string(),
            ),
            "select" | "shop" | "s" => DemoCommand::Select(ProductId::new(
                argument.ok_or(CommandError::MissingArgument {
                    command: "select",
                    expected: "a product id",
                })?,
            )),
            "broken-image" | "broken" => {
                DemoCommand::BrokenImage(ProductId::new(argument.ok_or(
                    CommandError::MissingArgument {
                        command: "broken-image",
                        expected: "a product id",
                    },
                )?))
            }
            "dismiss" => DemoCommand::Dismiss,
            "show" => DemoCommand::Show,
            "quit" | "exit" | "q" => DemoCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

impl fmt::Display for DemoCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoCommand::Next => f.write_str("next"),
            DemoCommand::Previous => f.write_str("prev"),
            DemoCommand::GoTo(raw) => write!(f, "goto {raw}"),
            DemoCommand::Select(id) => write!(f, "select {id}"),
            DemoCommand::BrokenImage(id) => write!(f, "broken-image {id}"),
            DemoCommand::Dismiss => f.write_str("dismiss"),
            DemoCommand::Show => f.write_str("show"),
            DemoCommand::Quit => f.write_str("quit"),
        }
    }
}

/// Parse a comma separated script such as `"next,next,goto 3,select 2"`.
/// Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<DemoCommand>, CommandError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_steps() {
        let commands = parse_script("next, next ,goto 3,prev,,select 2").unwrap();
        assert_eq!(
            commands,
            [
                DemoCommand::Next,
                DemoCommand::Next,
                DemoCommand::GoTo("3".into()),
                DemoCommand::Previous,
                DemoCommand::Select("2".into()),
            ]
        );
    }

    #[test]
    fn goto_keeps_the_raw_index() {
        assert_eq!(
            "goto -1".parse::<DemoCommand>(),
            Ok(DemoCommand::GoTo("-1".into()))
        );
    }

    #[test]
    fn errors_name_the_problem() {
        assert_eq!(
            parse_script("next,dance"),
            Err(CommandError::Unknown("dance".into()))
        );
        let err = "select".parse::<DemoCommand>().unwrap_err();
        assert_eq!(err.to_string(), "'select' needs a product id");
    }
}
