use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `tagschema` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tagschema",
    version,
    about = "Generate JSON Schema documents from annotated type descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Extra TOML config file (overrides project and user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a schema from a JSON or TOML type descriptor.
    Generate(GenerateArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Descriptor file (`.json` or `.toml`); reads JSON from stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Single-line output regardless of `output.pretty`
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_input() {
        let cli = Cli::try_parse_from(["tagschema", "generate", "--input", "user.json", "--compact"])
            .expect("should parse generate");

        match &cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("user.json")));
                assert!(args.compact);
            }
            Commands::Config => panic!("expected generate"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tagschema", "config", "--verbose", "-c", "x.toml"])
            .expect("should parse config");
        assert!(matches!(cli.command, Commands::Config));
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
    }

    #[test]
    fn generate_reads_stdin_by_default() {
        let cli = Cli::try_parse_from(["tagschema", "generate"]).expect("should parse");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.input.is_none());
        assert!(!args.compact);
    }
}
