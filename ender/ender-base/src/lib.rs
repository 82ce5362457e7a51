extern crate java_rand;

pub mod bounding_box;
pub mod direction;
pub mod math;
pub mod position;
pub mod range;
pub mod version;

pub use bounding_box::BoundingBox;
pub use direction::{Axis, Direction};
pub use position::{BlockPosition, ColumnPosition};
pub use range::ColumnRange;
pub use version::{Dimension, GeneratorFlags, Version};
