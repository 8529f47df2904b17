use clap::Subcommand;
use std::path::PathBuf;

pub mod chart;
pub mod scale;
pub mod summary;
pub mod validate;

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a plan document is structurally valid
    Validate {
        /// Plan document to load
        file: PathBuf,
    },

    /// Print plan metadata, the metric inventory, and phase totals
    #[command(visible_alias = "s")]
    Summary {
        /// Plan document to load
        file: PathBuf,
    },

    /// Derive a re-scaled plan and emit it as JSON
    Scale {
        /// Plan document to load
        file: PathBuf,

        /// Metric magnitude percentage (100 = unchanged)
        #[arg(long, default_value_t = 100.0)]
        vu: f64,

        /// Duration percentage (100 = unchanged)
        #[arg(long, default_value_t = 100.0)]
        time: f64,

        /// Let metrics that scale to zero stay at zero instead of flooring to 1
        #[arg(long)]
        allow_zero: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project the cumulative time series used for charting
    Chart {
        /// Plan document to load
        file: PathBuf,

        /// Metric magnitude percentage applied before projecting
        #[arg(long, default_value_t = 100.0)]
        vu: f64,

        /// Duration percentage applied before projecting
        #[arg(long, default_value_t = 100.0)]
        time: f64,

        /// Output format
        #[arg(long, value_parser = ["json", "csv"], default_value = "json")]
        format: String,
    },
}
