use serde_json::{Value, json};

pub const MARKER_FILL_OPACITY: f64 = 0.6;
pub const MARKER_STROKE_COLOR: &str = "#000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.8;

/// A magnitude-scaled circle with its popup, ready to hand to the map.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualMarker {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
    pub fill_color: &'static str,
    pub popup_text: String,
}

impl VisualMarker {
    /// GeoJSON Point feature carrying the Leaflet circle options as properties.
    pub fn to_feature(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.longitude, self.latitude],
            },
            "properties": {
                "radius": self.radius,
                "fillColor": self.fill_color,
                "fillOpacity": MARKER_FILL_OPACITY,
                "color": MARKER_STROKE_COLOR,
                "stroke": true,
                "weight": MARKER_STROKE_WEIGHT,
                "popup": self.popup_text,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_carries_circle_options() {
        let marker = VisualMarker {
            longitude: -75.0,
            latitude: 37.0,
            radius: 62_500.0,
            fill_color: "#ff9143",
            popup_text: "<h3>Magnitude: 2.5</h3>".to_string(),
        };
        let feature = marker.to_feature();

        assert_eq!(feature["geometry"]["coordinates"], json!([-75.0, 37.0]));
        assert_eq!(feature["properties"]["radius"], 62_500.0);
        assert_eq!(feature["properties"]["fillColor"], "#ff9143");
        assert_eq!(feature["properties"]["fillOpacity"], 0.6);
        assert_eq!(feature["properties"]["color"], "#000");
        assert_eq!(feature["properties"]["weight"], 0.8);
        assert_eq!(feature["properties"]["popup"], "<h3>Magnitude: 2.5</h3>");
    }
}
