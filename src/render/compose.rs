use super::legend::{legend_entries, legend_html};
use crate::config::Config;
use crate::models::{
    layer::EarthquakeLayer,
    view::{LayerControl, LegendControl, MapView, Overlay, TileLayer, TileOptions},
};

pub const MAP_CENTER: [f64; 2] = [37.09, -75.71];
pub const MAP_ZOOM: f64 = 3.25;
pub const TILE_MAX_ZOOM: u8 = 18;

pub const EARTHQUAKES_SOURCE: &str = "/layers/earthquakes";
pub const PLATES_SOURCE: &str = "/layers/plates";

const LIGHT_TILES: &str =
    "https://api.mapbox.com/styles/v1/mapbox/light-v9/tiles/256/{z}/{x}/{y}?access_token={accessToken}";
const SATELLITE_TILES: &str =
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}";
const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
     <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
     Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Lays out base maps, overlays and the legend for the browser.
pub struct MapComposer {
    tile_provider_token: String,
}

impl MapComposer {
    pub fn new(config: &Config) -> Self {
        Self {
            tile_provider_token: config.tile_provider_token.clone(),
        }
    }

    fn tile_layer(
        &self,
        name: &'static str,
        url_template: &'static str,
        id: &'static str,
        visible: bool,
    ) -> TileLayer {
        TileLayer {
            name,
            url_template,
            visible,
            options: TileOptions {
                attribution: MAPBOX_ATTRIBUTION,
                max_zoom: TILE_MAX_ZOOM,
                id,
                access_token: self.tile_provider_token.clone(),
            },
        }
    }

    /// The earthquake layer is already built; plate boundaries are appended
    /// by the page once their feed resolves.
    pub fn compose(&self, earthquakes: &EarthquakeLayer) -> MapView {
        let entries = legend_entries();
        let html = legend_html(&entries);

        MapView {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            base_layers: vec![
                self.tile_layer("Light Map", LIGHT_TILES, "mapbox.light", false),
                self.tile_layer("Satellite Map", SATELLITE_TILES, "mapbox.satellite", true),
            ],
            overlays: vec![
                Overlay {
                    name: "Earthquakes",
                    source: EARTHQUAKES_SOURCE,
                    visible: true,
                    deferred: false,
                },
                Overlay {
                    name: "Tectonic Plates",
                    source: PLATES_SOURCE,
                    visible: true,
                    deferred: true,
                },
            ],
            layer_control: LayerControl { collapsed: false },
            legend: LegendControl {
                position: "bottomleft",
                entries,
                html,
            },
            extent: earthquakes.extent,
        }
    }
}
