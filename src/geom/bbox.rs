use geo::{Coord, Rect};

/// Axis-aligned extent of every point in the dataset.
///
/// Built once per pass from the full point set; per-feature code only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalBounds {
    rect: Rect<f64>,
}

impl GlobalBounds {
    /// Fold a point stream into its bounds. `None` when the stream is empty.
    pub fn from_coords<'a>(coords: impl IntoIterator<Item = &'a Coord<f64>>) -> Option<Self> {
        coords.into_iter()
            .map(|&coord| Rect::new(coord, coord))
            .reduce(|a, b| Rect::new(
                Coord {
                    x: a.min().x.min(b.min().x),
                    y: a.min().y.min(b.min().y),
                },
                Coord {
                    x: a.max().x.max(b.max().x),
                    y: a.max().y.max(b.max().y),
                },
            ))
            .map(|rect| Self { rect })
    }

    #[inline] pub fn min_x(&self) -> f64 { self.rect.min().x }
    #[inline] pub fn min_y(&self) -> f64 { self.rect.min().y }
    #[inline] pub fn max_x(&self) -> f64 { self.rect.max().x }
    #[inline] pub fn max_y(&self) -> f64 { self.rect.max().y }

    /// Horizontal extent (max_x - min_x).
    #[inline] pub fn span_x(&self) -> f64 { self.rect.width() }

    /// Vertical extent (max_y - min_y).
    #[inline] pub fn span_y(&self) -> f64 { self.rect.height() }

    /// Midpoint of the extent.
    #[inline] pub fn center(&self) -> Coord<f64> { self.rect.center() }

    /// Zero span on either axis; aspect and scale fall back to 1.0.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span_x() == 0.0 || self.span_y() == 0.0
    }
}
