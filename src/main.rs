use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transcript_screen::{
    EntityEngine, OfflineEngine, PatternLibrary, PresidioConfig, PresidioEngine, ReportSummary,
    ScreenConfig, Screener, ScreeningOutput, Span, load_policy_documents, read_transcript,
};

#[derive(Parser)]
#[command(name = "transcript-screen")]
#[command(author, version, about = "Compliance screening for conversation transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a transcript for PII, financial figures, prohibited language and obligations
    Screen {
        /// Input transcript (plain text, or JSON with a `transcript` field)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the JSON report; a text summary is printed when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Transcript language code
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Minimum calibrated confidence for statistical PII findings
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Skip the statistical engine and use the regex detector only
        #[arg(long)]
        regex_only: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare regex and statistical PII detection on a transcript
    Compare {
        /// Input transcript (plain text, or JSON with a `transcript` field)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the policy documents found in a directory
    Policies {
        /// Directory of .txt / .ttx policy files
        #[arg(short, long)]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            input,
            output,
            language,
            threshold,
            regex_only,
            verbose,
        } => {
            setup_logging(verbose);
            screen_transcript(input, output, language, threshold, regex_only).await
        }
        Commands::Compare { input, verbose } => {
            setup_logging(verbose);
            compare_detectors(input).await
        }
        Commands::Policies { dir } => {
            setup_logging(false);
            list_policies(dir)
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_engine(regex_only: bool) -> Box<dyn EntityEngine> {
    if regex_only {
        info!("Regex-only mode: statistical engine disabled");
        return Box::new(OfflineEngine);
    }

    let config = PresidioConfig::from_env();
    info!("Using Presidio analyzer at {}", config.analyzer_url);
    Box::new(PresidioEngine::new(config))
}

async fn screen_transcript(
    input: PathBuf,
    output: Option<PathBuf>,
    language: String,
    threshold: f64,
    regex_only: bool,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript(&input).context("Failed to load input transcript")?;

    let library = PatternLibrary::new().context("Failed to compile pattern library")?;
    let config = ScreenConfig {
        score_threshold: threshold,
        ..Default::default()
    };
    let screener = Screener::new(build_engine(regex_only), library, config);

    let report = screener.screen(&transcript, &language).await;

    match output {
        Some(path) => {
            ScreeningOutput::new(report, &input, &language).write_json(&path)?;
            info!("Report written to {:?}", path);
        }
        None => print!("{}", ReportSummary::new(&report).format()),
    }

    Ok(())
}

async fn compare_detectors(input: PathBuf) -> Result<()> {
    let transcript = read_transcript(&input).context("Failed to load input transcript")?;
    let library = PatternLibrary::new().context("Failed to compile pattern library")?;
    let screener = Screener::new(build_engine(false), library, ScreenConfig::default());

    let comparison = screener
        .compare(&transcript)
        .await
        .context("Statistical engine failed")?;

    println!("PII Detection Comparison");
    println!("========================");
    println!("Regex findings: {}", comparison.regex.len());
    println!("Statistical findings: {}", comparison.statistical.len());
    println!();

    println!("Regex only");
    println!("----------");
    for span in comparison.regex_only() {
        print_span(span);
    }
    println!();

    println!("Statistical only");
    println!("----------------");
    for span in comparison.statistical_only() {
        print_span(span);
    }

    Ok(())
}

fn print_span(span: &Span) {
    match span.confidence {
        Some(confidence) => println!(
            "[{}..{}] {}: {} ({:.3})",
            span.start, span.end, span.entity_type, span.value, confidence
        ),
        None => println!("[{}..{}] {}: {}", span.start, span.end, span.entity_type, span.value),
    }
}

fn list_policies(dir: PathBuf) -> Result<()> {
    let documents = load_policy_documents(&dir)?;

    println!("Policy documents in {:?}: {}", dir, documents.len());
    for (name, content) in &documents {
        println!("{}: {} chars", name, content.chars().count());
    }

    Ok(())
}
