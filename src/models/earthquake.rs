use crate::error::RecordError;
use crate::models::feed::Feature;
use serde_json::Value;

/// One event from the earthquake feed, as far as the map needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub magnitude: f64,
    pub place: Option<String>,
    pub timestamp_millis: Option<i64>,
}

impl TryFrom<&Feature> for EarthquakeRecord {
    type Error = RecordError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or(RecordError::MissingGeometry)?;
        match geometry.kind.as_str() {
            "Point" => {}
            "" => return Err(RecordError::UntypedGeometry),
            other => return Err(RecordError::NotAPoint(other.to_string())),
        }

        let coords = geometry
            .coordinates
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or_default();
        if coords.len() < 2 {
            return Err(RecordError::TooFewCoordinates(coords.len()));
        }
        // positional: [lon, lat, depth?]
        let (Some(longitude), Some(latitude)) =
            (coords[0].as_f64(), coords[1].as_f64())
        else {
            return Err(RecordError::InvalidCoordinates);
        };

        let magnitude = feature
            .property("mag")
            .and_then(|v| v.as_f64())
            .ok_or(RecordError::MissingMagnitude)?;

        Ok(EarthquakeRecord {
            longitude,
            latitude,
            magnitude,
            place: feature
                .property("place")
                .and_then(Value::as_str)
                .map(str::to_string),
            timestamp_millis: feature.property("time").and_then(|v| v.as_i64()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feed::Geometry;
    use serde_json::json;

    fn feature(geometry: Option<Geometry>, properties: serde_json::Value) -> Feature {
        Feature {
            geometry,
            properties: Some(properties),
        }
    }

    fn point(coordinates: serde_json::Value) -> Option<Geometry> {
        Some(Geometry {
            kind: "Point".to_string(),
            coordinates,
        })
    }

    #[test]
    fn test_full_record() {
        let f = feature(
            point(json!([-120.25, 36.5, 10.0])),
            json!({ "mag": 2.5, "place": "10km N of Testville", "time": 1609459200000i64 }),
        );
        let record = EarthquakeRecord::try_from(&f).unwrap();
        assert_eq!(record.longitude, -120.25);
        assert_eq!(record.latitude, 36.5);
        assert_eq!(record.magnitude, 2.5);
        assert_eq!(record.place.as_deref(), Some("10km N of Testville"));
        assert_eq!(record.timestamp_millis, Some(1_609_459_200_000));
    }

    #[test]
    fn test_missing_place_and_time_are_tolerated() {
        let f = feature(point(json!([1.0, 2.0])), json!({ "mag": 3, "place": null }));
        let record = EarthquakeRecord::try_from(&f).unwrap();
        assert_eq!(record.magnitude, 3.0);
        assert_eq!(record.place, None);
        assert_eq!(record.timestamp_millis, None);
    }

    #[test]
    fn test_negative_magnitude_is_kept() {
        let f = feature(point(json!([0.0, 0.0])), json!({ "mag": -1, "place": "Deep Sea" }));
        assert_eq!(EarthquakeRecord::try_from(&f).unwrap().magnitude, -1.0);
    }

    #[test]
    fn test_unusable_features_are_rejected() {
        let no_geometry = feature(None, json!({ "mag": 1.0 }));
        assert_eq!(
            EarthquakeRecord::try_from(&no_geometry),
            Err(RecordError::MissingGeometry)
        );

        let line = feature(
            Some(Geometry {
                kind: "LineString".to_string(),
                coordinates: json!([[0.0, 0.0], [1.0, 1.0]]),
            }),
            json!({ "mag": 1.0 }),
        );
        assert_eq!(
            EarthquakeRecord::try_from(&line),
            Err(RecordError::NotAPoint("LineString".to_string()))
        );

        let short = feature(point(json!([5.0])), json!({ "mag": 1.0 }));
        assert_eq!(
            EarthquakeRecord::try_from(&short),
            Err(RecordError::TooFewCoordinates(1))
        );

        let untyped = feature(
            Some(Geometry {
                kind: String::new(),
                coordinates: json!([1.0, 2.0]),
            }),
            json!({ "mag": 1.0 }),
        );
        assert_eq!(
            EarthquakeRecord::try_from(&untyped),
            Err(RecordError::UntypedGeometry)
        );

        let no_mag = feature(point(json!([0.0, 0.0])), json!({ "mag": "big" }));
        assert_eq!(
            EarthquakeRecord::try_from(&no_mag),
            Err(RecordError::MissingMagnitude)
        );
    }

    #[test]
    fn test_coordinates_are_read_by_position() {
        let null_longitude = feature(point(json!([null, 36.0, 10.0])), json!({ "mag": 1.0 }));
        assert_eq!(
            EarthquakeRecord::try_from(&null_longitude),
            Err(RecordError::InvalidCoordinates)
        );

        let text_latitude = feature(point(json!([-120.0, "36", 10.0])), json!({ "mag": 1.0 }));
        assert_eq!(
            EarthquakeRecord::try_from(&text_latitude),
            Err(RecordError::InvalidCoordinates)
        );

        // a non-numeric depth does not shift the pair
        let odd_depth = feature(point(json!([-120.0, 36.0, null])), json!({ "mag": 1.0 }));
        let record = EarthquakeRecord::try_from(&odd_depth).unwrap();
        assert_eq!((record.longitude, record.latitude), (-120.0, 36.0));
    }
}
