//! 2D Geometry primitives for grid-based dungeon generation.
//!
//! # Overview
//!
//! `oubliette-geometry` provides the geometric types the generation pipeline is
//! built on. It leverages `glam` for vector math but adds grid-specific
//! abstractions: rectangles with *inclusive* corners (a rect covers whole
//! tiles, not half-open spans) and the distance metrics used for hallway
//! costs and pathfinding heuristics.
//!
//! # Key Features
//!
//! *   **Primitives:** [`Rect`](shapes::Rect) with derived width, height and center.
//! *   **Distance:** Manhattan-free metric family: Euclidean and Chebyshev.
//! *   **Iterators:** Iterate over every tile covered by a shape.
//!
//! ## Basic Example
//!
//! ```rust
//! use oubliette_geometry::prelude::*;
//!
//! // A room covering columns 1..=8 and rows 1..=8
//! let room = Rect::new(IVec2::new(1, 1), IVec2::new(8, 8));
//! assert_eq!(room.width(), 8);
//! assert_eq!(room.center(), IVec2::new(4, 4));
//!
//! // Euclidean distance between two points
//! let dist = Pythagoras.distance2d(IVec2::new(0, 0), IVec2::new(3, 4));
//! assert_eq!(dist, 5.0);
//! ```

#![deny(missing_docs)]

pub mod distance;
pub mod shapes;

pub mod prelude {
    //! Convenient re-exports of the geometry types.
    pub use crate::distance::*;
    pub use crate::shapes::*;
    pub use glam::{IVec2, UVec2, Vec2};
}
