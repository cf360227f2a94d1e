pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CATALOG_PATH: &str = "data/cookies.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cookie-shop")]
#[command(about = "Order cookies from a virtual cookie shop")]
pub struct CliConfig {
    /// Path to the catalog CSV (overrides [catalog] path in the config file)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Path to a TOML shop profile
    #[arg(short, long)]
    pub config: Option<String>,

    /// Hide items mentioning any of these words (e.g. --avoid nuts,gluten)
    #[arg(long, value_delimiter = ',')]
    pub avoid: Vec<String>,

    /// Load and validate the catalog, then exit without taking an order
    #[arg(long)]
    pub check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
