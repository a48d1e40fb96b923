use clap::Parser;
use quakemap::config::{EARTHQUAKE_FEED_URL, PLATE_BOUNDARY_FEED_URL};
use quakemap::{Config, FeedSource, MapServer};
use tracing_subscriber::EnvFilter;

/// Serve a web map of recent earthquakes over tectonic plate boundaries.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Earthquake GeoJSON feed, URL or local file
    #[arg(long, default_value = EARTHQUAKE_FEED_URL)]
    earthquake_feed: FeedSource,

    /// Plate boundary GeoJSON feed, URL or local file
    #[arg(long, default_value = PLATE_BOUNDARY_FEED_URL)]
    plate_boundary_feed: FeedSource,

    /// Mapbox access token for the base map tiles
    #[arg(
        long,
        env = "MAPBOX_ACCESS_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    tile_token: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            earthquake_feed: cli.earthquake_feed,
            plate_boundary_feed: cli.plate_boundary_feed,
            tile_provider_token: cli.tile_token,
            port: cli.port,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from(Cli::parse());
    let server = MapServer::new(config).await?;
    server.start().await
}
