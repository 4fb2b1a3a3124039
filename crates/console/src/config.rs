use clap::Parser;

use stockroom_observability::LogFormat;
use stockroom_reports::LOW_STOCK_THRESHOLD;

/// Runtime configuration (flags with environment fallbacks).
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom")]
#[command(about = "In-memory inventory ledger with stock reports")]
#[command(version)]
pub struct Config {
    /// Quantity at or below which a product is reported as low stock.
    #[arg(long, env = "STOCKROOM_LOW_STOCK_THRESHOLD", default_value_t = LOW_STOCK_THRESHOLD)]
    pub low_stock_threshold: u64,

    /// Log output format on stderr: `text` or `json`.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            log_format: LogFormat::default(),
        }
    }
}
