mod bbox;
mod canvas;
mod proj;

pub use bbox::GlobalBounds;
pub use canvas::{Canvas, PixelTransform};
pub use proj::ProjectionCenter;
