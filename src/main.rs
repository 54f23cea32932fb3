use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;

use feed_loader::cli::{Cli, Commands};
use feed_loader::config::Config;
use feed_loader::errors::{AppError, AppResult};
use feed_loader::{FeedItem, FeedLoader, RemoteFeedLoader, ReqwestHttpClient};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Load { url, timeout, json } => cmd_load(&config, url.as_deref(), timeout, json),
    }
}

fn cmd_load(config: &Config, url: Option<&str>, timeout: Option<u64>, json: bool) -> AppResult<()> {
    let url = config.resolve_feed_url(url)?;
    let timeout = match timeout {
        Some(0) => {
            return Err(AppError::Config(
                "--timeout must be a positive number of seconds".to_string(),
            ))
        }
        Some(secs) => Duration::from_secs(secs),
        None => config.timeout,
    };

    let client = ReqwestHttpClient::new(timeout)?;
    let loader = RemoteFeedLoader::new(url, client);

    tracing::info!(url = %loader.url(), timeout_secs = timeout.as_secs(), "Loading feed");

    let (tx, rx) = mpsc::channel();
    loader.load(Box::new(move |result| {
        // The receiver only goes away if main is already exiting
        let _ = tx.send(result);
    }));

    let items = rx.recv().map_err(|_| AppError::NoResult)??;

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &items)?;
        writeln!(stdout)?;
    } else {
        print_items(&mut stdout, &items)?;
    }

    Ok(())
}

fn print_items(out: &mut impl Write, items: &[FeedItem]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "Feed is empty.")?;
        return Ok(());
    }

    for item in items {
        writeln!(out, "  {}", item.id)?;
        if let Some(description) = &item.description {
            writeln!(out, "    Description: {}", description)?;
        }
        if let Some(location) = &item.location {
            writeln!(out, "    Location: {}", location)?;
        }
        writeln!(out, "    Image: {}", item.image_url)?;
        writeln!(out)?;
    }

    writeln!(out, "Loaded {} items.", items.len())
}
