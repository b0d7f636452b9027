mod seed;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use dropoff_core::Coordinate;
use dropoff_db::CenterStore;
use dropoff_geocode::Geocoder;
use dropoff_search::{SearchRequest, SortKey, WallClock};

#[derive(Debug, Parser)]
#[command(name = "dropoff-cli")]
#[command(about = "dropoff operational command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the YAML seed dataset into Postgres.
    Seed {
        /// Dataset file; defaults to the configured centers path.
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Run a nearby search against the configured store.
    Search {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        /// Radius in miles.
        #[arg(long, default_value_t = 25.0)]
        radius: f64,
        /// Category filter; repeat for any-of matching.
        #[arg(long)]
        category: Vec<String>,
        /// Keep only centers open right now.
        #[arg(long)]
        open_now: bool,
        /// distance | name | category | open_first
        #[arg(long, default_value = "distance")]
        sort_by: SortKey,
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Resolve an address to coordinates.
    Geocode { address: String },
    /// Probe the configured store.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = dropoff_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Seed { path } => {
            let dataset_path = path.unwrap_or_else(|| config.centers_path.clone());
            seed::run(&config, &dataset_path).await?;
        }
        Commands::Search {
            lat,
            lng,
            radius,
            category,
            open_now,
            sort_by,
            limit,
        } => {
            let store = CenterStore::from_config(&config).await;
            let request = SearchRequest {
                origin: Coordinate::new(lat, lng),
                radius_miles: radius,
                categories: category,
                open_now,
                sort_by,
                limit,
            };
            let take = i64::try_from(request.limit.saturating_mul(2))
                .context("limit too large")?;
            let candidates = store.list_active(&request.categories, take).await?;
            let results = dropoff_search::search(&request, candidates, WallClock::now());
            if results.is_empty() {
                println!("no centers found");
            }
            for scored in results {
                println!(
                    "{:>6.2} mi  {} ({}, {})",
                    scored.distance, scored.center.name, scored.center.city, scored.center.state
                );
            }
        }
        Commands::Geocode { address } => {
            let geocoder = match config.opencage_api_key.as_deref() {
                Some(key) => Geocoder::opencage(key, config.geocode_timeout_secs)?,
                None => Geocoder::static_table(),
            };
            let result = geocoder.geocode(&address).await?;
            println!(
                "{} -> ({}, {})",
                result.formatted_address, result.lat, result.lng
            );
        }
        Commands::Health => {
            let store = CenterStore::from_config(&config).await;
            store.health().await?;
            let backend = if store.is_postgres() {
                "postgres"
            } else {
                "static"
            };
            println!("store healthy ({backend})");
        }
    }

    Ok(())
}
