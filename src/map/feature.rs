//! Input document model and outer-ring / name extraction.

use geo::{Coord, LineString};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::MapError;

/// Property keys probed for a display name, in priority order.
const NAME_KEYS: &[&str] = &["name", "NAME_1", "NAME", "state_name", "STATE_NAME", "admin", "ADM1_EN"];

/// Name used when a property bag has nothing usable.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// A geometry collection document: a mapping with a `features` list.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<RawFeature>,
}

/// One input record: a geometry plus a property bag.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Geometry shape tag with its still-untyped coordinate arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub shape: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl RawFeature {
    /// Best-effort display name, see [`find_name`].
    pub fn name(&self) -> String {
        match &self.properties {
            Some(properties) => find_name(properties),
            None => UNKNOWN_NAME.to_string(),
        }
    }
}

impl RawGeometry {
    /// Outer rings of this geometry in lon/lat, one per polygon.
    /// `index` is the feature position, used only in error reports.
    ///
    /// Unrecognized shapes yield no rings. Inner rings are discarded. An empty
    /// outer ring is kept as an empty polygon.
    pub fn outer_rings(&self, index: usize) -> Result<Vec<LineString<f64>>, MapError> {
        let malformed = |shape: &'static str, reason: String| MapError::MalformedGeometry { feature: index, shape, reason };

        Ok(match self.shape.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(self.coordinates.clone())
                    .map_err(|e| malformed("Polygon", e.to_string()))?;
                rings.into_iter().next().into_iter()
                    .map(|outer| parse_ring(outer).map_err(|e| malformed("Polygon", e)))
                    .collect::<Result<Vec<_>, _>>()?
            }
            "MultiPolygon" => {
                let members: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_value(self.coordinates.clone())
                    .map_err(|e| malformed("MultiPolygon", e.to_string()))?;
                members.into_iter()
                    .filter_map(|member| member.into_iter().next()) // members without rings are skipped
                    .map(|outer| parse_ring(outer).map_err(|e| malformed("MultiPolygon", e)))
                    .collect::<Result<Vec<_>, _>>()?
            }
            _ => Vec::new(),
        })
    }
}

/// Convert GeoJSON positions into a non-closed ring.
fn parse_ring(positions: Vec<Vec<f64>>) -> Result<LineString<f64>, String> {
    let mut coords = positions.into_iter()
        .map(|position| match position[..] {
            [x, y, ..] => Ok(Coord { x, y }),
            _ => Err(format!("position with {} value(s), expected at least 2", position.len())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // GeoJSON repeats the first vertex at the end; rings here are stored open.
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }

    Ok(LineString(coords))
}

/// Best-effort display name from a property bag.
///
/// Probes [`NAME_KEYS`] in order, then falls back to the first non-empty value
/// of any key (document order), then to [`UNKNOWN_NAME`]. First match wins.
pub fn find_name(properties: &Map<String, Value>) -> String {
    NAME_KEYS.iter()
        .filter_map(|key| properties.get(*key))
        .chain(properties.values())
        .find(|value| is_truthy(value))
        .map(value_to_string)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text form of a name value; booleans are capitalized (`True`, `False`).
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}
