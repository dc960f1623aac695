//! DCA Tuner CLI
//!
//! Fetches the on-chain metric catalog, runs the tuned-vs-regular DCA
//! comparison for every metric, and prints the leaderboard.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dca_tuner::adapters::brk::BrkClient;
use dca_tuner::adapters::cli::{CliApp, Command, LatestCmd, RankCmd};
use dca_tuner::application::{collect_all_metrics, rank_metrics};
use dca_tuner::config::{load_config, Config};
use dca_tuner::domain::RankedMetric;
use dca_tuner::metrics::{catalog::PRICE_METRIC, DerivedMetric, METRICS};
use dca_tuner::ports::MetricSource;

#[tokio::main]
async fn main() -> Result<()> {
    let app = CliApp::parse();

    match app.command {
        Command::Rank(cmd) => rank_command(app.verbose, app.debug, cmd).await,
        Command::Metrics(_) => {
            init_logging(app.verbose, app.debug, "warn")?;
            metrics_command()
        }
        Command::Latest(cmd) => latest_command(app.verbose, app.debug, cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool, base_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level))
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}

async fn rank_command(verbose: bool, debug: bool, cmd: RankCmd) -> Result<()> {
    let mut config = load_config(&cmd.config).context("Failed to load configuration")?;
    apply_overrides(&mut config, &cmd);
    init_logging(verbose, debug, &config.logging.level)?;

    let settings = config.rank_settings()?;
    let client = BrkClient::with_config(config.brk_config())?;

    tracing::info!(source = %config.source.api_base_url, "fetching metric catalog");
    let data = client.fetch_all().await.context("Failed to fetch metrics")?;
    tracing::info!(days = data.len(), metrics = data.metrics.len(), "metrics fetched");

    let Some(prices) = data.series(PRICE_METRIC) else {
        bail!("price series '{}' missing from the metric source", PRICE_METRIC);
    };
    let prices = prices.to_vec();

    let all_metrics = collect_all_metrics(&data);
    let ranked = rank_metrics(&all_metrics, &prices, &settings)?;

    match cmd.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&ranked)?),
        "text" => print_leaderboard(&ranked),
        other => bail!("unknown output format '{}' (expected: text, json)", other),
    }
    Ok(())
}

fn print_leaderboard(ranked: &[RankedMetric]) {
    if ranked.is_empty() {
        println!("No metrics could be ranked.");
        return;
    }

    println!(
        "{:>3}  {:<55} {:<8} {:>7} {:>10} {:>7} {:>9} {:>9}",
        "#", "METRIC", "MODEL", "TUNED", "BTC", "DCA", "OUT PERF", "BTC PERF"
    );
    for (rank, row) in ranked.iter().enumerate() {
        println!(
            "{:>3}  {:<55} {:<8} {:>6}% {:>10.3} {:>6}% {:>8}% {:>8}%",
            rank + 1,
            row.metric,
            row.model,
            row.profit_pct,
            row.btc_bought,
            row.regular_profit_pct,
            row.outperformance_pct,
            row.btc_outperformance_pct,
        );
    }
}

fn metrics_command() -> Result<()> {
    println!("Base metrics:");
    for metric in METRICS {
        println!("  {}", metric);
    }
    println!("Derived metrics:");
    for derived in DerivedMetric::ALL {
        println!("  {}", derived.name());
    }
    Ok(())
}

async fn latest_command(verbose: bool, debug: bool, cmd: LatestCmd) -> Result<()> {
    let mut config = load_config(&cmd.config).context("Failed to load configuration")?;
    if let Some(source) = cmd.source {
        config.source.api_base_url = source;
    }
    init_logging(verbose, debug, &config.logging.level)?;

    let client = BrkClient::with_config(config.brk_config())?;
    let date = client
        .latest_date()
        .await
        .context("Failed to fetch latest date")?;
    println!("{}", date);
    Ok(())
}

fn apply_overrides(config: &mut Config, cmd: &RankCmd) {
    if let Some(window) = &cmd.dca_window {
        config.dca.time_range = window.clone();
    }
    if let Some(window) = &cmd.zscore_window {
        config.zscore.time_range = window.clone();
    }
    if let Some(temperature) = cmd.temperature {
        config.model.temperature = temperature;
    }
    if let Some(budget) = cmd.budget {
        config.dca.budget_per_day = budget;
    }
    if let Some(source) = &cmd.source {
        config.source.api_base_url = source.clone();
    }
}
