use crate::error::RecordError;
use crate::models::{
    feed::FeatureCollection,
    layer::{LayerBuild, PathStyle, PlateLayer, SkippedRecord},
};

/// Thin cyan lines, no fill.
pub const PLATE_BOUNDARY_STYLE: PathStyle = PathStyle {
    color: "cyan",
    weight: 0.5,
};

const BOUNDARY_KINDS: [&str; 4] = ["LineString", "MultiLineString", "Polygon", "MultiPolygon"];

/// Collect every line or polygon geometry under one uniform style.
pub fn build_plate_layer(collection: &FeatureCollection) -> LayerBuild<PlateLayer> {
    let mut geometries = Vec::with_capacity(collection.features.len());
    let mut skipped = Vec::new();

    for (index, feature) in collection.features.iter().enumerate() {
        match &feature.geometry {
            Some(g) if BOUNDARY_KINDS.contains(&g.kind.as_str()) => geometries.push(g.clone()),
            Some(g) if g.kind.is_empty() => skipped.push(SkippedRecord {
                index,
                reason: RecordError::UntypedGeometry,
            }),
            Some(g) => skipped.push(SkippedRecord {
                index,
                reason: RecordError::UnsupportedBoundary(g.kind.clone()),
            }),
            None => skipped.push(SkippedRecord {
                index,
                reason: RecordError::MissingGeometry,
            }),
        }
    }

    LayerBuild {
        layer: PlateLayer {
            style: PLATE_BOUNDARY_STYLE,
            geometries,
        },
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boundaries_share_one_style() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "Name": "AF-AN", "PlateA": "AF", "PlateB": "AN" },
                    "geometry": { "type": "LineString", "coordinates": [[-0.4, -54.8], [0.0, -54.6]] }
                },
                {
                    "type": "Feature",
                    "properties": { "Name": "PA" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                }
            ]
        }))
        .unwrap();

        let build = build_plate_layer(&fc);
        assert!(build.is_complete());
        assert_eq!(build.layer.geometries.len(), 2);
        assert_eq!(build.layer.style, PathStyle { color: "cyan", weight: 0.5 });

        let geojson = build.layer.to_geojson();
        assert_eq!(geojson["style"], json!({ "color": "cyan", "weight": 0.5 }));
        assert_eq!(geojson["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(geojson["features"][0]["properties"], json!({}));
        assert_eq!(geojson["features"][1]["geometry"]["type"], "Polygon");
    }

    #[test]
    fn test_points_are_not_boundaries() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "features": [
                { "geometry": { "type": "Point", "coordinates": [0.0, 0.0] } },
                { "geometry": null },
                { "geometry": { "type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]] } }
            ]
        }))
        .unwrap();

        let build = build_plate_layer(&fc);
        assert_eq!(build.layer.geometries.len(), 1);
        assert_eq!(build.skipped.len(), 2);
        assert_eq!(
            build.skipped[0].reason,
            RecordError::UnsupportedBoundary("Point".to_string())
        );
        assert_eq!(build.skipped[1].index, 1);
    }

    #[test]
    fn test_untyped_geometry_is_skipped() {
        let fc = FeatureCollection::from_slice(
            br#"{ "features": [
                { "geometry": { "coordinates": [[0.0, 0.0], [1.0, 1.0]] } },
                { "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] } }
            ] }"#,
        )
        .unwrap();

        let build = build_plate_layer(&fc);
        assert_eq!(build.layer.geometries.len(), 1);
        assert_eq!(
            build.skipped,
            vec![SkippedRecord {
                index: 0,
                reason: RecordError::UntypedGeometry
            }]
        );
    }
}
