use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use divergence_scanner::{
    cli::{
        commands::{Cli, Commands},
        params::split_symbols,
    },
    config::load_config_path,
    providers::alpaca_rest::AlpacaProvider,
    scan::{ScanPlan, run_scan},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = load_config_path(&cli.config)
        .with_context(|| format!("loading config {}", cli.config))?;

    match &cli.command {
        Commands::Scan {
            symbols,
            amount,
            unit,
            end,
        } => {
            if let Some(list) = symbols {
                cfg.symbols = split_symbols(list);
            }
            if let Some(amount) = amount {
                cfg.timeframe.amount = *amount;
            }
            if let Some(unit) = unit {
                cfg.timeframe.unit = unit.clone();
            }
            cfg.normalize()?;

            let end = match end {
                Some(raw) => raw
                    .parse::<DateTime<Utc>>()
                    .with_context(|| format!("parsing --end {raw}"))?,
                None => Utc::now(),
            };
            let plan = ScanPlan::from_config(&cfg, end)?;

            let provider = AlpacaProvider::new()?;
            let report = run_scan(&provider, &plan).await;

            println!();
            println!("Recommendations (sorted):");
            for signal in &report.signals {
                println!("{}: {}", signal.symbol, signal.recommendation);
            }
            eprintln!(
                "SUMMARY: {} signals, {} failed",
                report.signals.len(),
                report.failures.len()
            );
        }
    }

    Ok(())
}
