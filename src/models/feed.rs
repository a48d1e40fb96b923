use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The subset of a GeoJSON FeatureCollection both feeds rely on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Empty when the feed omits `type`; the layer builders reject it.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Feature {
    /// Property lookup that treats a null or absent `properties` object as empty.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

impl FeatureCollection {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
