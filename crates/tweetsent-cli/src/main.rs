mod analyze;
mod report;
mod samples;
mod session;

use std::future::Future;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use tweetsent_core::AppConfig;
use tweetsent_sentiment::{Classifier, LexiconScorer, Scorer};

#[derive(Debug, Parser)]
#[command(name = "tweetsent")]
#[command(about = "Polarity-based tweet sentiment analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify the sample tweets and print each result
    Samples,
    /// Analyze a CSV file, print a summary, and write the export and chart
    Analyze {
        /// Input CSV (defaults to `TWEETSENT_INPUT_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Results CSV destination
        #[arg(long)]
        export: Option<PathBuf>,

        /// SVG chart destination
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Maximum number of rows to analyze
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,
    },
    /// Classify text typed at the prompt until `quit`
    Interactive,
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Apply `analyze` flags on top of the environment config.
fn apply_analyze_overrides(
    mut config: AppConfig,
    input: Option<PathBuf>,
    export: Option<PathBuf>,
    chart: Option<PathBuf>,
    limit: Option<usize>,
) -> AppConfig {
    if let Some(input) = input {
        config.input_path = input;
    }
    if let Some(export) = export {
        config.export_path = export;
    }
    if let Some(chart) = chart {
        config.chart_path = chart;
    }
    if let Some(limit) = limit {
        config.row_cap = limit;
    }
    config
}

/// Run every stage in order: self-test, file batch, interactive session.
///
/// A batch failure is reported inline and the session still runs.
///
/// # Errors
///
/// Returns an I/O error if writing to `output` fails.
async fn run_full<S, W, I>(
    config: &AppConfig,
    classifier: &Classifier<S>,
    lines: &mut mpsc::Receiver<String>,
    output: &mut W,
    interrupt: I,
) -> std::io::Result<()>
where
    S: Scorer,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    let rule = format!("{}\n", "=".repeat(40));
    let heading = format!(
        "{}\n",
        report::banner("🐦 SIMPLE TWITTER SENTIMENT ANALYZER", 40)
    );

    output.write_all(heading.as_bytes()).await?;
    output
        .write_all(samples::render_self_test(config, classifier).as_bytes())
        .await?;
    output.write_all(rule.as_bytes()).await?;
    output
        .write_all(analyze::run_batch_stage(config, classifier).as_bytes())
        .await?;
    output.write_all(rule.as_bytes()).await?;
    output.flush().await?;
    session::run_interactive_stage(classifier, lines, output, interrupt).await?;
    output.write_all("\n🎉 Done!\n".as_bytes()).await?;
    output.flush().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = tweetsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    let classifier = Classifier::new(LexiconScorer::new());

    match cli.command {
        None => {
            let mut lines = session::spawn_stdin_reader();
            let mut stdout = tokio::io::stdout();
            run_full(&config, &classifier, &mut lines, &mut stdout, session::ctrl_c()).await?;
        }
        Some(Commands::Samples) => print!("{}", samples::render_self_test(&config, &classifier)),
        Some(Commands::Analyze {
            input,
            export,
            chart,
            limit,
        }) => {
            let config = apply_analyze_overrides(config, input, export, chart, limit);
            print!("{}", analyze::run_batch_stage(&config, &classifier));
        }
        Some(Commands::Interactive) => session::run_interactive(&classifier).await?,
    }

    Ok(())
}
