pub mod error;
pub mod geometry;
pub mod image_loader;
pub mod image_output;
pub mod landmarks;
pub mod paint;
pub mod style;

pub use error::{Error, ImageError, RegionError, RenderError, Result};
pub use geometry::Point;
pub use image_output::OutputFormat;
pub use landmarks::LandmarkSet;
pub use paint::{BrowTexture, Canvas, HairTexture, MakeupRenderer};
pub use style::color::{ColorParseError, Rgba};
pub use style::{BlendMode, MakeupConfig, RegionStyle};
