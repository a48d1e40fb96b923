pub mod compose;
pub mod earthquakes;
pub mod feature;
pub mod legend;
pub mod plates;

pub use compose::MapComposer;
pub use earthquakes::build_earthquake_layer;
pub use feature::render_feature;
pub use legend::{legend_entries, legend_html};
pub use plates::build_plate_layer;
