use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use seoscope_core::{
    Analyzer, AnalyzerConfig, Capability, DEFAULT_API_BASE, DEFAULT_MODEL, Report, Stopwords, SuggestionConfig,
    SuggestionSource, read_source, suggest,
};
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{
    format_size, print_analysis_details, print_banner, print_info, print_step, print_timing_summary, print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze text content for readability, keywords and SEO improvements
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(author = "seoscope Contributors")]
#[command(version)]
#[command(about = "Analyze text content for readability, keywords and SEO suggestions", long_about = None)]
struct Args {
    /// Path to the text file to analyze, or "-" for stdin
    #[arg(short, long, default_value = "sample_content.txt", value_name = "FILE")]
    file: String,

    /// Use mock suggestions (no API key needed)
    #[arg(long)]
    mock: bool,

    /// Number of top keywords to show
    #[arg(short, long, default_value = "8", value_name = "N")]
    top: NonZeroUsize,

    /// Stopword list replacing the built-in one (whitespace separated)
    #[arg(long, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// Chat model used for suggestions
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL, value_name = "NAME")]
    model: String,

    /// API key for the completion endpoint (mock mode when absent)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, value_name = "KEY")]
    api_key: Option<String>,

    /// Base URL of the chat-completion API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_API_BASE, value_name = "URL")]
    api_base: String,

    /// Timeout for the suggestion request in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Logs go to stderr; stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "seoscope_core=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_stopwords(path: Option<&Path>) -> anyhow::Result<Stopwords> {
    match path {
        Some(path) => {
            let list = fs::read_to_string(path)
                .with_context(|| format!("Failed to read stopword list: {}", path.display()))?;
            Ok(Stopwords::parse(&list))
        }
        None => Ok(Stopwords::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let start = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
        print_step(1, 4, &format!("Reading content from {}", args.file.bright_white()));
    }

    let stage = Instant::now();
    let text = read_source(&args.file).with_context(|| format!("Failed to read content from: {}", args.file))?;
    let stopwords = load_stopwords(args.stopwords.as_deref())?;
    timings.push(("Read".to_string(), stage.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(text.len()).bright_white());
        eprintln!(
            "  {} {}\n",
            "Stopwords:".dimmed(),
            stopwords.len().to_string().bright_white()
        );
        print_step(2, 4, "Computing readability and keyword metrics");
    }

    let stage = Instant::now();
    let config = AnalyzerConfig::builder().top_n(args.top.get()).stopwords(stopwords).build();
    let analysis = Analyzer::with_config(config).analyze(&text);
    timings.push(("Analyze".to_string(), stage.elapsed()));

    if args.verbose {
        print_analysis_details(&analysis);
    }

    let suggestion_config = SuggestionConfig {
        api_key: args.api_key,
        model: args.model,
        api_base: args.api_base,
        timeout: args.timeout,
        ..Default::default()
    };
    let capability = Capability::resolve(args.mock, &suggestion_config);

    if args.verbose {
        print_step(3, 4, "Requesting SEO suggestions");
        match capability {
            Capability::Mock(reason) => print_info(&format!("Mock mode: {}", reason.describe())),
            Capability::Remote => print_info(&format!("Model: {}", suggestion_config.model)),
        }
        eprintln!();
    }

    let stage = Instant::now();
    let suggestions = suggest(&analysis.prompt(), capability, &suggestion_config).await;
    timings.push(("Suggest".to_string(), stage.elapsed()));

    if let SuggestionSource::Fallback { reason } = &suggestions.source {
        print_warning(&format!("Suggestion request failed, showing fallback suggestions: {}", reason));
    }

    if args.verbose {
        print_step(4, 4, "Writing report");
        eprintln!();
        print_timing_summary(start.elapsed(), &timings);
    }

    let report = Report::new(&args.file, &analysis, capability.is_mock(), &suggestions);
    print!("{}", report);

    Ok(())
}
