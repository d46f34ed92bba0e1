//! Version command for the sse-wire CLI.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
pub fn handle_version_command() {
    println!("sse-wire {}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        // Version should be in semver format (e.g., "0.1.0")
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }
}
