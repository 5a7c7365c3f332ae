//! Command-line argument parsing.

use std::path::PathBuf;

/// Options for running the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Number of greeting rows to generate labels for.
    pub rows: usize,
    /// Discard any saved state before starting.
    pub reset: bool,
    /// Override the state file location.
    pub state_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            rows: 1000,
            reset: false,
            state_file: None,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored; flags that need a value report an error
/// string suitable for printing to stderr.
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1); // Skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--reset" => options.reset = true,
            "--rows" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--rows requires a number".to_string())?;
                options.rows = value
                    .parse()
                    .map_err(|_| format!("invalid value for --rows: {}", value))?;
            }
            "--state-file" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--state-file requires a path".to_string())?;
                options.state_file = Some(PathBuf::from(value));
            }
            _ => {}
        }
    }
    Ok(CliCommand::RunTui(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        let mut full = vec!["greetdeck".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_no_args_runs_tui_with_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            CliCommand::RunTui(RunOptions::default())
        );
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_rows() {
        match parse(&["--rows", "50"]).unwrap() {
            CliCommand::RunTui(options) => assert_eq!(options.rows, 50),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rows_missing_value() {
        assert!(parse(&["--rows"]).is_err());
    }

    #[test]
    fn test_parse_rows_bad_value() {
        assert!(parse(&["--rows", "many"]).is_err());
    }

    #[test]
    fn test_parse_reset_and_state_file() {
        match parse(&["--reset", "--state-file", "/tmp/s.json"]).unwrap() {
            CliCommand::RunTui(options) => {
                assert!(options.reset);
                assert_eq!(options.state_file, Some(PathBuf::from("/tmp/s.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_flags_ignored() {
        assert_eq!(
            parse(&["--whatever"]).unwrap(),
            CliCommand::RunTui(RunOptions::default())
        );
    }
}
