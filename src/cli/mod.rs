//! CLI module for sse-wire.
//!
//! Provides:
//! - Argument parsing
//! - Version display
//! - `encode` / `decode` commands over stdin and stdout
//!
//! # Usage
//!
//! ```ignore
//! use sse_wire::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! run_cli_command(args)?;
//! ```

pub mod args;
pub mod run;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use run::{decode, encode};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::Config;

/// Resolve configuration: file (if given), then environment, then flags.
pub fn load_config(args: &CliArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)
            .wrap_err_with(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_env().wrap_err("reading SSE_WIRE_* environment")?;

    if let CliCommand::Decode {
        max_line_bytes: Some(limit),
    } = args.command
    {
        config.parser.max_line_bytes = Some(limit);
    }
    config.validate()?;
    Ok(config)
}

/// Run a parsed command against the process's stdin and stdout.
pub fn run_cli_command(args: CliArgs) -> Result<()> {
    match args.command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => print!("{}", USAGE),
        CliCommand::Encode { keep_alive_every } => {
            let config = load_config(&args)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            encode(stdin.lock(), stdout.lock(), &config.writer, keep_alive_every)
                .wrap_err("encode failed")?;
        }
        CliCommand::Decode { .. } => {
            let config = load_config(&args)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            decode(stdin.lock(), stdout.lock(), &config.parser).wrap_err("decode failed")?;
        }
    }
    Ok(())
}
