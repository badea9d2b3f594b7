//! NFT drop server CLI
//!
//! ```bash
//! nftdrop serve                          # Start HTTP server (port 3000)
//! nftdrop serve --fixtures drops.json    # Serve local fixtures instead of Sanity
//! nftdrop collections                    # List collections
//! nftdrop collection ape-escape          # Show one collection as JSON
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use nftdrop::{config::DEFAULT_PORT, open_store, ContentStore, SiteConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "nftdrop")]
#[command(about = "Browse curated NFT drops and mint from a connected wallet", long_about = None)]
struct Cli {
    /// Read collections from a JSON file instead of Sanity
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// List all collections
    Collections,

    /// Show one collection as JSON
    Collection {
        /// Collection identifier (slug)
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    let fixtures = cli.fixtures.as_deref();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port, cli.fixtures.clone()).await,
        Commands::Collections => cmd_collections(fixtures).await,
        Commands::Collection { id } => cmd_collection(fixtures, &id).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nftdrop=info,tower_http=info")),
        )
        .try_init()?;
    Ok(())
}

async fn cmd_serve(port: u16, fixtures: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env(port, fixtures);
    nftdrop::server::start_server(config).await
}

async fn cmd_collections(fixtures: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(fixtures)?;
    let collections = store.fetch_collections().await?;

    if collections.is_empty() {
        eprintln!("No collections found.");
        return Ok(());
    }

    eprintln!("{} collections:\n", collections.len());
    for c in collections {
        println!("  {} ({})", c.title, c.slug.current);
        println!("     Contract: {}", c.address);
        if let Some(creator) = &c.creator {
            println!("     Creator:  {}", creator.name);
        }
        println!();
    }

    Ok(())
}

async fn cmd_collection(fixtures: Option<&Path>, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(fixtures)?;

    match store.fetch_collection(id).await? {
        Some(collection) => {
            println!("{}", serde_json::to_string_pretty(&collection)?);
            Ok(())
        }
        None => Err(format!("Collection not found: {}", id).into()),
    }
}
