use thiserror::Error;

/// Conditions that abort a map build. Raised through `anyhow` so callers can
/// `downcast_ref::<MapError>()` when they need to tell them apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    /// No feature contributed a single coordinate, so neither a projection
    /// center nor bounds exist.
    #[error("no polygon coordinates found in the input document")]
    NoCoordinates,

    /// A Polygon/MultiPolygon whose coordinate arrays are not numeric positions.
    #[error("feature {feature}: malformed {shape} coordinates ({reason})")]
    MalformedGeometry { feature: usize, shape: &'static str, reason: String },

    /// The raster backend refused to allocate the pixel buffer.
    #[error("could not allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}
