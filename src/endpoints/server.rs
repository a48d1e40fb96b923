use crate::config::Config;
use crate::endpoints::handlers::{
    earthquakes_handler, legend_handler, plates_handler, view_handler, webmap_handler,
};
use crate::models::view::MapView;
use crate::reader::open_feed;
use crate::render::{MapComposer, build_earthquake_layer, build_plate_layer};
use crate::traits::FeedReader;
use crate::utils::summary::print_layer_summary;
use anyhow::Context;
use axum::{Router, body::Bytes, routing::get};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Progress of the plate-boundary fetch, which finishes after the map is up.
#[derive(Debug, Clone)]
pub enum PlateState {
    Pending,
    Ready(Bytes),
    Failed(String),
}

pub struct AppState {
    pub view: MapView,
    pub earthquakes: Bytes,
    pub plates: watch::Receiver<PlateState>,
}

pub struct MapServer {
    config: Config,
    state: Arc<AppState>,
    plate_feed: Arc<dyn FeedReader>,
    plate_tx: watch::Sender<PlateState>,
}

impl MapServer {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        let earthquake_feed = open_feed(&config.earthquake_feed, &client);
        let plate_feed = open_feed(&config.plate_boundary_feed, &client);

        Self::with_feeds(config, earthquake_feed, plate_feed).await
    }

    /// Loads and renders the earthquake feed before returning; the map has
    /// nothing to show without it. The plate feed is only read on `launch`.
    pub async fn with_feeds(
        config: Config,
        earthquake_feed: Arc<dyn FeedReader>,
        plate_feed: Arc<dyn FeedReader>,
    ) -> anyhow::Result<Self> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        pb.set_message(format!("Fetching {}", earthquake_feed.describe()));
        pb.enable_steady_tick(Duration::from_millis(100));

        let fetched = earthquake_feed.read_features().await;
        pb.finish_and_clear();
        let collection = fetched.with_context(|| {
            format!(
                "failed to load earthquake feed from {}",
                earthquake_feed.describe()
            )
        })?;

        let build = build_earthquake_layer(&collection);
        info!(
            markers = build.layer.len(),
            skipped = build.skipped.len(),
            "🌋 Earthquake layer built"
        );
        for skip in &build.skipped {
            warn!(index = skip.index, reason = %skip.reason, "Skipped earthquake feature");
        }
        print_layer_summary(&build);

        let composer = MapComposer::new(&config);
        let view = composer.compose(&build.layer);
        let (plate_tx, plates) = watch::channel(PlateState::Pending);

        let state = AppState {
            view,
            earthquakes: serde_json::to_vec(&build.layer.to_geojson())
                .context("failed to serialise the earthquake layer")?
                .into(),
            plates,
        };

        Ok(Self {
            config,
            state: Arc::new(state),
            plate_feed,
            plate_tx,
        })
    }

    /// Router plus the background task that fetches plate boundaries into it.
    pub fn launch(self) -> (Router, JoinHandle<()>) {
        let app = router(self.state.clone());
        let plate_feed = self.plate_feed;
        let plate_tx = self.plate_tx;

        let task = tokio::spawn(async move {
            let outcome = match plate_feed.read_features().await {
                Ok(collection) => {
                    let build = build_plate_layer(&collection);
                    info!(
                        boundaries = build.layer.geometries.len(),
                        skipped = build.skipped.len(),
                        "🧩 Plate boundary layer built"
                    );
                    match serde_json::to_vec(&build.layer.to_geojson()) {
                        Ok(body) => PlateState::Ready(body.into()),
                        Err(e) => PlateState::Failed(e.to_string()),
                    }
                }
                Err(e) => {
                    warn!(
                        source = %plate_feed.describe(),
                        error = %e,
                        "Plate boundaries unavailable, overlay stays empty"
                    );
                    PlateState::Failed(e.to_string())
                }
            };
            plate_tx.send_replace(outcome);
        });

        (app, task)
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        if self.config.tile_provider_token.is_empty() {
            warn!("No tile provider token set, base maps will not load (see --tile-token)");
        }

        let (app, _plates) = self.launch();

        println!(
            r#"
    🚀 Quakemap serving on {}

    🌍 Earthquake map
       → http://{}/map

    📚 Map layout (JSON)
       → http://{}/map/view
            "#,
            addr, addr, addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(webmap_handler))
        .route("/map", get(webmap_handler))
        .route("/map/view", get(view_handler))
        .route("/legend", get(legend_handler))
        .route("/layers/earthquakes", get(earthquakes_handler))
        .route("/layers/plates", get(plates_handler))
        .with_state(state)
}
