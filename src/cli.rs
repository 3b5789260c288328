use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agroadvisor",
    version,
    about = "Agricultural advisory CLI with rule-based crop recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Validate config and test datasource connections
    Check,
    /// Resolve a crop recommendation for the farm profile
    Advise {
        /// Crop override (e.g. "Wheat", "Corn (Maize)")
        #[arg(long)]
        crop: Option<String>,

        /// Soil type override (e.g. "Loamy", "Black Cotton")
        #[arg(long)]
        soil: Option<String>,

        /// Region override (e.g. "West India")
        #[arg(long)]
        region: Option<String>,

        /// Weather condition override (e.g. "Warm", "Heavy Rainfall")
        #[arg(long)]
        weather: Option<String>,

        /// Auto-fill crop, soil and weather from the region's reference data
        #[arg(long)]
        auto: bool,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,

        /// Print the general cultivation practices list instead
        #[arg(long)]
        general: bool,
    },
    /// Assemble the full markdown advisory report
    Report {
        /// Print the extracted dashboard sections instead of raw markdown
        #[arg(long)]
        sections: bool,
    },
    /// Fetch and print the hourly weather forecast
    Forecast {
        /// Hours ahead to show
        #[arg(long, default_value_t = 12)]
        hours: u32,

        /// Show temperatures in Fahrenheit
        #[arg(long)]
        fahrenheit: bool,

        /// Show wind speeds in mph
        #[arg(long)]
        mph: bool,
    },
    /// Print the region reference profiles
    Regions,
    /// Print government support scheme listings
    Schemes,
}
