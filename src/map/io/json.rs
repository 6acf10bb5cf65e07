use serde_json::{json, Value};

use crate::map::{Region, RegionMap};

/// Round to 3 decimal places, halves away from zero.
#[inline]
fn round3(value: f64) -> f64 { (value * 1000.0).round() / 1000.0 }

impl Region {
    /// JSON record for one province: id, name, id color and pixel polygons.
    pub fn to_json(&self) -> Value {
        let polygons: Vec<Vec<[f64; 2]>> = self.polygons().iter()
            .map(|ring| ring.0.iter().map(|c| [round3(c.x), round3(c.y)]).collect())
            .collect();

        json!({
            "id": self.id(),
            "name": self.name(),
            "id_color_html": self.id_color_html(),
            "polygons": polygons,
        })
    }
}

impl RegionMap {
    /// Output document consumed by the game engine. All polygons are in
    /// image-space pixel coordinates.
    pub fn to_json(&self) -> Value {
        let canvas = self.canvas();
        json!({
            "projection": "image_space",
            "image_width": canvas.width,
            "image_height": canvas.height,
            "provinces": self.regions().iter().map(Region::to_json).collect::<Vec<_>>(),
        })
    }
}
