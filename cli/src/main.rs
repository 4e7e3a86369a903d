//! CLI entrypoint for postcraft
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use futures::StreamExt;
use postcraft_application::{GeneratePostsInput, PostAgent, PromptStorePort};
use postcraft_domain::config::validation::has_errors;
use postcraft_domain::{AgentEvent, OutputFormat, PostParser, Severity};
use postcraft_infrastructure::{ConfigLoader, FileConfig, GeminiClient, YamlPromptStore};
use postcraft_presentation::{
    Cli, Command, ConsoleFormatter, EventSink, JsonlWriter, ProgressReporter, RefineArgs,
    SimpleProgress,
};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Dropping the guard flushes the log file, so it lives until main returns
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting postcraft");

    // === Dependency Injection ===
    let store = Arc::new(YamlPromptStore::new(config.prompts.source()));
    let parser = Arc::new(PostParser::new(config.post.clone())?);
    let agent = build_agent(&config, store.clone(), parser.clone())?;
    let formatter = ConsoleFormatter::new(parser);

    match command {
        Command::Generate(args) => {
            let format = args
                .output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();

            let mut input = GeneratePostsInput::new(args.field);
            if let Some(context) = args.context {
                input = input.with_context(context);
            }

            match format {
                OutputFormat::Json => {
                    let result = agent.generate_posts(input).await?;
                    println!("{}", ConsoleFormatter::format_json(&result));
                    Ok(ExitCode::SUCCESS)
                }
                OutputFormat::Jsonl => {
                    run_stream(&agent, input, JsonlWriter::new(io::stdout())).await
                }
                OutputFormat::Pretty if cli.quiet => {
                    run_stream(&agent, input, SimpleProgress::new(formatter)).await
                }
                OutputFormat::Pretty => {
                    run_stream(&agent, input, ProgressReporter::new(formatter)).await
                }
            }
        }
        Command::Trending { field } => {
            let topics = agent.get_trending_topics(&field).await?;
            println!("{}", topics.trim());
            Ok(ExitCode::SUCCESS)
        }
        Command::Refine(args) => {
            let refined = refine(&agent, args).await?;
            if cli.quiet {
                println!("{}", refined.trim());
            } else {
                print!("{}", formatter.format_refined(&refined));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Prompts { reload_check } => {
            if reload_check {
                store.reload();
            }
            let names = store
                .list_prompts()
                .with_context(|| format!("Failed to load prompts from {}", store.source()))?;
            let missing = store.missing_required()?;
            print!("{}", ConsoleFormatter::format_prompts(&names, &missing));

            if reload_check && !missing.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Install the tracing subscriber: stderr always, plus a file when requested
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    let Some(path) = log_file else {
        registry.init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}

/// Log warnings and abort on configuration errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("config: {}", issue.message);
    }

    if has_errors(&issues) {
        let errors: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn build_agent(
    config: &FileConfig,
    prompts: Arc<dyn PromptStorePort>,
    parser: Arc<PostParser>,
) -> Result<PostAgent> {
    let agent_config = Arc::new(config.agent_config());
    let agent = PostAgent::new(agent_config, prompts, parser);

    let gemini = &config.providers.gemini;
    let Some(api_key) = gemini.resolve_api_key() else {
        warn!(
            env = %gemini.api_key_env,
            "No API key configured; post generation is disabled"
        );
        return Ok(agent);
    };

    let client = Arc::new(GeminiClient::new(
        api_key,
        gemini.base_url.clone(),
        Duration::from_secs(gemini.timeout_secs),
    )?);
    info!(base_url = %gemini.base_url, "Gemini client configured");

    Ok(agent.with_llm(client.clone()).with_search(client))
}

/// Feed every event to `sink`; fails the process when the run ended in an error
async fn run_stream(
    agent: &PostAgent,
    input: GeneratePostsInput,
    mut sink: impl EventSink,
) -> Result<ExitCode> {
    let mut events = agent.generate_posts_stream(input);
    let mut failed = false;

    while let Some(event) = events.next().await {
        failed |= matches!(event, AgentEvent::Error { .. });
        sink.on_event(&event)?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn refine(agent: &PostAgent, args: RefineArgs) -> Result<String> {
    let post = match (args.post.post, args.post.post_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post from {}", path.display()))?,
        (None, None) => bail!("Either --post or --post-file is required"),
    };
    Ok(agent.refine_post(&post, &args.feedback).await?)
}
