pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod reader;
pub mod render;
pub mod scale;
pub mod traits;
pub mod utils;

pub use config::{Config, FeedSource};
pub use endpoints::server::MapServer;
pub use error::{FeedError, RecordError};
