use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use tutorank_core::{RankingPipeline, Settings, format_results_readable};

fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "tutorank")]
#[command(about = "Find the best YouTube tutorials for a topic and group them into a curriculum")]
struct Cli {
    /// Topic to learn, e.g. "rust" or "react hooks"
    topic: String,

    /// Print the raw JSON result instead of the readable report
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library logs only when something is wrong, the spinner covers progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load()?;

    // Validate API key early
    if let Err(e) = settings.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let pipeline = RankingPipeline::from_settings(&settings);

    if cli.json {
        let results = pipeline.rank(&cli.topic).await?;
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("tutorank").cyan().bold(),
        style("Tutorial Ranker").dim()
    );

    let start = Instant::now();
    let spinner = create_spinner(&format!("Ranking {} tutorials...", cli.topic))?;
    let results = match pipeline.rank(&cli.topic).await {
        Ok(results) => results,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_with_message(format!(
        "{} Ranked {} videos {}",
        style("✓").green().bold(),
        results.videos.len(),
        style(format!("[{}]", format_elapsed(start.elapsed()))).dim()
    ));

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_results_readable(&cli.topic, &results);
    println!("{}", readable);

    Ok(())
}
