pub mod feed;

pub use feed::FeedReader;
