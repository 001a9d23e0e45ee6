use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the watchlist config (TOML, or a JSON array of symbols)
    #[arg(short, long)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the watchlist and report non-HOLD recommendations
    Scan {
        /// Comma-separated list of symbols overriding the config watchlist
        /// (e.g. "AAPL,MSFT")
        #[arg(long)]
        symbols: Option<String>,

        /// Timeframe amount overriding the config (numeric value)
        #[arg(long)]
        amount: Option<u32>,

        /// Timeframe unit overriding the config: m (minute), h (hour),
        /// d (day), w (week), mo (month)
        #[arg(long)]
        unit: Option<String>,

        /// End of the fetch window in ISO8601 format
        /// (e.g. "2025-01-30T16:00:00Z"); defaults to now
        #[arg(long)]
        end: Option<String>,
    },
}
