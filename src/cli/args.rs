//! Command-line argument parsing for the sse-wire CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Usage text printed by `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: sse-wire <COMMAND> [OPTIONS]

Commands:
  encode    Turn each stdin line into one SSE event on stdout
  decode    Parse an SSE stream on stdin and print one payload per line

Options:
  --config <PATH>            JSON config file
  --keep-alive-every <N>     encode: send a keep-alive after every N events
  --max-line-bytes <N>       decode: fail on lines longer than N bytes
  -V, --version              Print version
  -h, --help                 Print this help
";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// stdin lines -> SSE events
    Encode { keep_alive_every: Option<usize> },
    /// SSE stream -> payload lines
    Decode { max_line_bytes: Option<usize> },
}

/// Command plus global options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub config: Option<PathBuf>,
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error("{flag} is not valid for the {command} command")]
    WrongCommand { flag: String, command: &'static str },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parse command-line arguments.
///
/// `args` includes the program name, as `std::env::args()` does. With no
/// command, the result is [`CliCommand::Help`].
///
/// # Examples
///
/// ```
/// use sse_wire::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sse-wire".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut command = None;
    let mut config = None;
    let mut keep_alive_every = None;
    let mut max_line_bytes = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    command: CliCommand::Version,
                    config,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    command: CliCommand::Help,
                    config,
                })
            }
            "--config" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                config = Some(PathBuf::from(value));
            }
            "--keep-alive-every" => {
                keep_alive_every = Some(parse_number(&arg, args.next())?);
            }
            "--max-line-bytes" => {
                max_line_bytes = Some(parse_number(&arg, args.next())?);
            }
            "encode" | "decode" if command.is_none() => command = Some(arg),
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    let command = match command.as_deref() {
        Some("encode") => {
            if max_line_bytes.is_some() {
                return Err(ArgsError::WrongCommand {
                    flag: "--max-line-bytes".to_string(),
                    command: "encode",
                });
            }
            CliCommand::Encode { keep_alive_every }
        }
        Some("decode") => {
            if keep_alive_every.is_some() {
                return Err(ArgsError::WrongCommand {
                    flag: "--keep-alive-every".to_string(),
                    command: "decode",
                });
            }
            CliCommand::Decode { max_line_bytes }
        }
        _ => CliCommand::Help,
    };

    Ok(CliArgs { command, config })
}

fn parse_number(flag: &str, value: Option<String>) -> Result<usize, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let mut full = vec!["sse-wire".to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_is_help() {
        assert_eq!(parse(&[]).unwrap().command, CliCommand::Help);
        assert_eq!(parse(&["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_parse_encode() {
        let args = parse(&["encode", "--keep-alive-every", "3"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::Encode {
                keep_alive_every: Some(3)
            }
        );
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_decode_with_config() {
        let args = parse(&["--config", "sse.json", "decode", "--max-line-bytes", "1048576"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::Decode {
                max_line_bytes: Some(1_048_576)
            }
        );
        assert_eq!(args.config, Some(PathBuf::from("sse.json")));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["decode", "--max-line-bytes"]),
            Err(ArgsError::MissingValue("--max-line-bytes".to_string()))
        );
        assert!(matches!(parse(&["--config"]), Err(ArgsError::MissingValue(_))));
    }

    #[test]
    fn test_parse_invalid_number() {
        assert!(matches!(
            parse(&["encode", "--keep-alive-every", "often"]),
            Err(ArgsError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_flag_for_wrong_command() {
        assert!(matches!(
            parse(&["encode", "--max-line-bytes", "10"]),
            Err(ArgsError::WrongCommand { command: "encode", .. })
        ));
        assert!(matches!(
            parse(&["decode", "--keep-alive-every", "2"]),
            Err(ArgsError::WrongCommand { command: "decode", .. })
        ));
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert_eq!(
            parse(&["encode", "decode"]),
            Err(ArgsError::UnknownArgument("decode".to_string()))
        );
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArgument(_))));
    }
}
