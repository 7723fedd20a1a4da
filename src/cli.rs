//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults apply when it does not exist.
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// List the game start first instead of the latest move
    #[arg(long)]
    pub ascending: bool,

    /// Start with the move list hidden
    #[arg(long)]
    pub hide_history: bool,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(!cli.ascending);
        assert!(!cli.hide_history);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--ascending",
            "--hide-history",
            "--log-file",
            "x.log",
        ])
        .unwrap();
        assert!(cli.ascending);
        assert!(cli.hide_history);
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
    }
}
