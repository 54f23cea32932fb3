use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feed-loader")]
#[command(about = "Load and validate a remote JSON feed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed once and print its items
    Load {
        /// Feed URL (defaults to FEED_URL)
        url: Option<String>,

        /// Request timeout in seconds (defaults to FEED_TIMEOUT_SECS, then 30)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the items as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}
