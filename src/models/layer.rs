use crate::error::RecordError;
use crate::models::{feed::Geometry, geometry::GeometryExtent, marker::VisualMarker};
use serde::Serialize;
use serde_json::{Value, json};

/// A feed entry the builder left out, by its position in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: RecordError,
}

/// What a layer builder hands back: the layer, plus whatever it could not draw.
#[derive(Debug, Clone)]
pub struct LayerBuild<L> {
    pub layer: L,
    pub skipped: Vec<SkippedRecord>,
}

impl<L> LayerBuild<L> {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EarthquakeLayer {
    pub markers: Vec<VisualMarker>, // feed order
    pub extent: Option<GeometryExtent>,
}

impl EarthquakeLayer {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.markers.iter().map(VisualMarker::to_feature).collect::<Vec<_>>(),
        })
    }
}

/// Leaflet path options applied to every boundary geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct PlateLayer {
    pub style: PathStyle,
    pub geometries: Vec<Geometry>,
}

impl PlateLayer {
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .geometries
            .iter()
            .map(|geometry| {
                json!({
                    "type": "Feature",
                    "geometry": geometry,
                    "properties": {},
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "style": self.style,
            "features": features,
        })
    }
}
