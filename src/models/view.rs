use crate::models::{geometry::GeometryExtent, legend::LegendEntry};
use serde::Serialize;

/// Everything the browser needs to build the Leaflet map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: [f64; 2], // [lat, lon]
    pub zoom: f64,
    pub base_layers: Vec<TileLayer>,
    pub overlays: Vec<Overlay>,
    pub layer_control: LayerControl,
    pub legend: LegendControl,
    pub extent: Option<GeometryExtent>,
}

/// A mutually exclusive base map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub visible: bool,
    pub options: TileOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub attribution: &'static str,
    pub max_zoom: u8,
    pub id: &'static str,
    pub access_token: String,
}

/// An independently toggled layer, loaded from one of our own endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub name: &'static str,
    pub source: &'static str,
    pub visible: bool,
    /// Deferred overlays are added empty and filled once their data arrives.
    pub deferred: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendControl {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
    pub html: String,
}
