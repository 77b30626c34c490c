//! Marquee CLI - resolve a chat message from the command line.
//!
//! Exercises the same pipeline the chat widget calls, against the live
//! TMDB catalog.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use marquee_core::{Resolver, TmdbCatalog, TmdbConfig};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Chat-style movie and TV discovery")]
struct Cli {
    /// Message to resolve, e.g. "telugu horror movies"
    message: Vec<String>,

    /// TMDB API key; falls back to the TMDB_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let message = cli.message.join(" ");

    let config = match cli.api_key {
        Some(key) => TmdbConfig::with_api_key(key),
        None => TmdbConfig::from_env().context("TMDB_API_KEY is not set")?,
    };

    let resolver = Resolver::new(Arc::new(TmdbCatalog::new(config)));
    let reply = resolver.resolve(&message).await;

    println!("{}", reply.text);
    for item in &reply.items {
        let year = if item.year.is_empty() {
            "----"
        } else {
            item.year.as_str()
        };
        println!(
            "  {} ({year}) [{}] {}",
            item.title,
            item.rating_label(),
            item.media_type.as_path()
        );
    }

    Ok(())
}
