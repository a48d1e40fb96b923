pub mod earthquake;
pub mod feed;
pub mod geometry;
pub mod layer;
pub mod legend;
pub mod marker;
pub mod view;
