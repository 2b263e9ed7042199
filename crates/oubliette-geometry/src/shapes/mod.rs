//! Grid-aligned shapes.

mod rectangle;

pub use rectangle::{Rect, RectIter};
