//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use postcraft_domain::OutputFormat;
use std::path::PathBuf;

/// Output mode for `generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One JSON wire message per line, as events happen
    Jsonl,
    /// Progress spinner, then the formatted posts
    Pretty,
    /// The collected result as a single JSON document
    Json,
}

impl From<OutputMode> for OutputFormat {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Jsonl => OutputFormat::Jsonl,
            OutputMode::Pretty => OutputFormat::Pretty,
            OutputMode::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for postcraft
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(author, version, about = "Research-backed LinkedIn post drafts from a single field name")]
#[command(long_about = r#"
Postcraft drafts LinkedIn posts for a professional field.

A run has three stages:
1. Trending: search for what the field is talking about and pick topics
2. Research: run several grounded searches and compile a report
3. Generation: draft post variations (storytelling, data-driven, thought leadership)

Set GOOGLE_API_KEY (or providers.gemini.api_key_env) to enable the model.

Configuration files are loaded from (in priority order):
1. POSTCRAFT_* environment variables (e.g. POSTCRAFT_POST__MAX_POSTS=2)
2. --config <path>     Explicit config file
3. ./postcraft.toml    Project-level config
4. ~/.config/postcraft/config.toml   Global config

Example:
  postcraft generate "Healthcare" --context "Focus on nursing staff"
  postcraft generate "Fintech" --output jsonl
  postcraft refine --feedback "Make it shorter" --post-file draft.txt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full pipeline and draft posts for a field
    Generate(GenerateArgs),

    /// Identify trending topics in a field
    Trending {
        /// Professional field, e.g. "Healthcare"
        field: String,
    },

    /// Rewrite a post according to feedback
    Refine(RefineArgs),

    /// List the prompts available to the pipeline
    Prompts {
        /// Reload the prompt source and report required prompts it lacks
        #[arg(long)]
        reload_check: bool,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Professional field, e.g. "Healthcare"
    pub field: String,

    /// Additional context passed to every stage
    #[arg(short, long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Output mode (defaults to `output.format` from config, then pretty)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputMode>,
}

#[derive(Args, Debug)]
pub struct RefineArgs {
    /// What to change
    #[arg(short, long, value_name = "TEXT")]
    pub feedback: String,

    #[command(flatten)]
    pub post: PostInput,
}

/// The post to refine, inline or from a file
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PostInput {
    /// Post text
    #[arg(long, value_name = "TEXT")]
    pub post: Option<String>,

    /// File containing the post text
    #[arg(long, value_name = "PATH")]
    pub post_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_with_context_and_output() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "-vv",
            "generate",
            "Healthcare",
            "--context",
            "Focus on nurses",
            "--output",
            "jsonl",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Generate(args)) => {
                assert_eq!(args.field, "Healthcare");
                assert_eq!(args.context.as_deref(), Some("Focus on nurses"));
                assert_eq!(args.output, Some(OutputMode::Jsonl));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_output_defaults_to_config() {
        let cli = Cli::try_parse_from(["postcraft", "generate", "Fintech"]).unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.output.is_none());
    }

    #[test]
    fn test_refine_requires_exactly_one_post_source() {
        let inline = Cli::try_parse_from([
            "postcraft",
            "refine",
            "--feedback",
            "shorter",
            "--post",
            "Hello LinkedIn",
        ])
        .unwrap();
        let Some(Command::Refine(args)) = inline.command else {
            panic!("expected refine");
        };
        assert_eq!(args.post.post.as_deref(), Some("Hello LinkedIn"));

        assert!(Cli::try_parse_from(["postcraft", "refine", "--feedback", "shorter"]).is_err());
        assert!(
            Cli::try_parse_from([
                "postcraft",
                "refine",
                "--feedback",
                "shorter",
                "--post",
                "a",
                "--post-file",
                "b.txt",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "prompts",
            "--reload-check",
            "--no-config",
            "--log-file",
            "run.log",
        ])
        .unwrap();
        assert!(cli.no_config);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(matches!(
            cli.command,
            Some(Command::Prompts { reload_check: true })
        ));
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["postcraft", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_output_mode_maps_to_domain_format() {
        assert_eq!(OutputFormat::from(OutputMode::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputMode::Pretty), OutputFormat::Pretty);
    }
}
