use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use sse_wire::cli::{parse_args, run_cli_command, USAGE};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays a clean event stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    run_cli_command(args)
}
