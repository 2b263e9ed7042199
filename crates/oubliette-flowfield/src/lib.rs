//! Vector flow field navigation over a finished dungeon grid.
//!
//! # Overview
//!
//! A flow field lets an arbitrary number of pursuers chase one moving target
//! for the price of a single flood fill. Rebuilding happens in two passes:
//!
//! 1. Starting at the destination tile, a breadth-first flood fill over the
//!    **4-neighbourhood** assigns every reachable walkable tile its step
//!    distance — a Dijkstra map.
//! 2. Every mapped tile then looks at its **8-neighbourhood** and picks the
//!    neighbour with the lowest distance; the offset to that neighbour is the
//!    tile's direction vector.
//!
//! The asymmetry is deliberate: integer 4-way distances keep the map cheap
//! and exact, while 8-way direction selection lets entities cut diagonals
//! for smoother motion. Consumers simply add the vector to their tile
//! position every step and arrive at the destination.
//!
//! # Example
//!
//! ```
//! use glam::IVec2;
//! use oubliette_flowfield::prelude::*;
//! use oubliette_generation::prelude::*;
//! use oubliette_geometry::prelude::Rect;
//!
//! // A 10x10 map whose interior is one open room.
//! let mut grid = Grid::new(10, 10);
//! grid.place_rect(Rect::new(IVec2::new(0, 0), IVec2::new(9, 9)));
//!
//! let mut field = FlowField::new(&grid);
//! field.rebuild(IVec2::new(4, 4)).unwrap();
//!
//! // A pursuer at (1, 1) is told to cut the diagonal.
//! assert_eq!(field.direction(IVec2::new(1, 1)), Some(IVec2::new(1, 1)));
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod field;

pub mod prelude {
    //! Convenient re-exports of the flow field types.
    pub use crate::error::FlowFieldError;
    pub use crate::field::FlowField;
}
