//! # Oubliette
//!
//! ## The procedural level-generation and navigation core of a top-down dungeon game
//!
//! `oubliette` turns a single integer *level* into a playable dungeon grid and
//! gives any number of pursuers a cheap way to chase a moving target across it.
//! The pipeline combines binary space partitioning, a minimum spanning tree over
//! the room graph, A* hallway carving, cellular-automata smoothing and weighted
//! entity placement; a vector flow field over the finished grid answers
//! per-tile "which way to the target" queries in O(1).
//!
//! This crate is the main facade, re-exporting the functionality of the
//! `oubliette` workspace.
//!
//! ## Quick Start
//!
//! ```rust
//! use oubliette::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Deterministic: the level seeds the random stream.
//! let (grid, constants) = generate_level(0)?;
//! println!("{}x{} dungeon for level {}", constants.width, constants.height, constants.level);
//!
//! // Chase the player from anywhere on the map.
//! let player = grid.find_tile(TileType::Player).unwrap();
//! let mut field = FlowField::new(&grid);
//! field.rebuild(player)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Available Features
//!
//! -   `generation`: The level pipeline (constants, BSP, rooms, hallways, placement).
//! -   `flowfield`: Dijkstra-map based flow field navigation.
//! -   `full`: Enables all features.
//!
//! Rendering, input, audio and gameplay rules are external collaborators: they
//! consume the generated grid and query the flow field but have no influence on
//! how either is produced.

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

// Re-export core types (always available)
pub use oubliette_geometry as geometry;
pub use oubliette_random as random;

// Optional feature-gated crates
#[cfg(feature = "generation")]
pub use oubliette_generation as generation;

#[cfg(feature = "flowfield")]
pub use oubliette_flowfield as flowfield;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types (always available)
    pub use crate::geometry::prelude::*;
    pub use crate::random::prelude::*;

    // Optional feature-gated modules
    #[cfg(feature = "generation")]
    pub use crate::generation::prelude::*;

    #[cfg(feature = "flowfield")]
    pub use crate::flowfield::prelude::*;
}
