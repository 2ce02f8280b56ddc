//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `parse`: Document the components of a source tree
//! - `init`: Create a `.propdocrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Take the command, or print help and return None if none was given.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Parse(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that analyze sources.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (defaults to the current directory)
    #[arg(long, env = "PROPDOC_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Additional module whose exports are prop validators (repeatable)
    #[arg(long = "validator-module", value_name = "NAME")]
    pub validator_modules: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Documentation records keyed by file path
    Json,
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract prop documentation from React components
    Parse(ParseCommand),
    /// Initialize a new .propdocrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let args = Arguments::try_parse_from([
            "propdoc",
            "parse",
            "--source-root",
            "web",
            "--format",
            "json",
            "--validator-module",
            "a",
            "--validator-module",
            "b",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose());
        let Some(Command::Parse(cmd)) = args.command else {
            panic!("expected parse command");
        };
        assert_eq!(cmd.format, OutputFormat::Json);
        assert_eq!(cmd.common.source_root, Some(PathBuf::from("web")));
        assert_eq!(cmd.common.validator_modules, vec!["a", "b"]);
    }

    #[test]
    fn test_verify_cli() {
        Arguments::command().debug_assert();
    }
}
