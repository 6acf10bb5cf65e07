mod json;
mod png;

pub use json::*;
pub use png::*;
