//! Command-line argument parsing for healthquiz
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// healthquiz - Five questions, personalized health tips
#[derive(Parser, Debug)]
#[command(name = "healthquiz")]
#[command(version)]
#[command(about = "Answer five questions about your habits and get personalized health tips", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Storage file (overrides the configured one)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress log output entirely)
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not clear the screen between questions
    #[arg(long)]
    pub no_clear: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Take the quiz, or show saved results if it was already completed
    Start,

    /// Show saved results without starting a new quiz
    Results,

    /// Forget saved answers so the quiz can be taken again
    Reset,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Subcommand to run, `start` when none was given
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Start)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter for this level (RUST_LOG still wins)
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "off",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "healthquiz=info",
            Verbosity::VeryVerbose => "healthquiz=debug",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["healthquiz", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["healthquiz"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["healthquiz", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["healthquiz", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_default_command_is_start() {
        assert_eq!(parse(&["healthquiz"]).command(), Commands::Start);
        assert_eq!(parse(&["healthquiz", "reset"]).command(), Commands::Reset);
    }

    #[test]
    fn test_store_override() {
        let args = parse(&["healthquiz", "--store", "/tmp/q.json", "results"]);
        assert_eq!(args.store, Some(PathBuf::from("/tmp/q.json")));
        assert_eq!(args.command(), Commands::Results);
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(Verbosity::Quiet.log_filter(), "off");
        assert!(Verbosity::VeryVerbose.log_filter().contains("debug"));
        assert_eq!(Verbosity::Verbose.as_str(), "verbose");
    }
}
