use super::feature::render_feature;
use crate::models::{
    earthquake::EarthquakeRecord,
    feed::FeatureCollection,
    geometry::GeometryExtent,
    layer::{EarthquakeLayer, LayerBuild, SkippedRecord},
};

/// Render every drawable feature, in feed order. Features that cannot be
/// placed or sized are reported back instead of drawn.
pub fn build_earthquake_layer(collection: &FeatureCollection) -> LayerBuild<EarthquakeLayer> {
    let mut markers = Vec::with_capacity(collection.features.len());
    let mut skipped = Vec::new();

    for (index, feature) in collection.features.iter().enumerate() {
        match EarthquakeRecord::try_from(feature) {
            Ok(record) => markers.push(render_feature(&record)),
            Err(reason) => skipped.push(SkippedRecord { index, reason }),
        }
    }

    let extent = GeometryExtent::from_points(markers.iter().map(|m| (m.longitude, m.latitude)));

    LayerBuild {
        layer: EarthquakeLayer { markers, extent },
        skipped,
    }
}
