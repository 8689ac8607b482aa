use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use favicon_key::favicon::{self, KeyIndex};

#[derive(Parser)]
#[command(name = "favicon-cli")]
#[command(about = "Derive and inspect favicon cache keys for feed links", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the favicon path for each feed link
    Derive {
        #[arg(required = true)]
        links: Vec<String>,
    },
    /// Print the cache key of a canonical hostname
    Key { hostname: String },
    /// Report key collisions across a file of feed links (one per line)
    Collisions { file: PathBuf },
    /// Ask a running service to derive the path for a link
    Remote {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
        link: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Derive { links } => {
            for link in &links {
                println!("{}\t{}", link, favicon::derive_favicon_path(link));
            }
        }
        Commands::Key { hostname } => {
            println!("{}", favicon::cache_key(&hostname));
        }
        Commands::Collisions { file } => {
            let content = std::fs::read_to_string(&file)?;
            let links = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'));
            let index = KeyIndex::from_links(links);
            let report = index.report();

            println!("hostnames:  {}", report.hostnames);
            println!("keys:       {}", report.keys);
            println!("fallbacks:  {}", index.fallback_links().len());
            println!("rate:       {:.6}", report.collision_rate());
            for collision in &report.collisions {
                println!("{}\t{}", collision.key, collision.hostnames.join(", "));
            }
        }
        Commands::Remote { url, link } => {
            let res = reqwest::Client::new()
                .get(format!("{}/api/favicon-path", url.trim_end_matches('/')))
                .query(&[("link", link.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
