//! Procedural dungeon generation for top-down games.
//!
//! # Overview
//!
//! This crate turns a single integer *level* into a playable dungeon: a 2D
//! grid of [`TileType`](tile::TileType) values containing walled rooms,
//! natural-looking hallways, obstacles, a player spawn, enemies and items.
//!
//! The pipeline runs once per level transition, in strict order:
//!
//! 1. **Constants** — [`config::LevelCounts`] scales map dimensions, the
//!    split budget and entity counts from the level number.
//! 2. **Space partition** — [`bsp::BspTree`] subdivides the empty map into
//!    containers using a work-list driven binary space partition.
//! 3. **Rooms** — [`rooms`] places one walled room inside each terminal
//!    container.
//! 4. **Hallways** — [`graph`] connects the rooms with a minimum spanning
//!    tree plus a few extra edges, [`hallways`] scatters obstacles and carves
//!    A* paths around them, then smooths the result with a cellular
//!    automaton. [`placement`] seeds the player, enemies and items.
//!
//! Everything draws from one [`Rng`](oubliette_random::rng::Rng) stream, so a
//! fixed seed reproduces a level byte for byte.
//!
//! # Example
//!
//! ```
//! use oubliette_generation::prelude::*;
//!
//! let (grid, constants) = generate_level(0).unwrap();
//! assert_eq!(grid.width(), constants.width);
//!
//! for (pos, tile) in grid.iter_tiles() {
//!     if tile == TileType::Player {
//!         println!("spawn at {pos}");
//!     }
//! }
//! ```

#![deny(missing_docs)]

pub mod astar;
pub mod bsp;
pub mod config;
pub mod error;
pub mod graph;
pub mod hallways;
pub mod map;
pub mod placement;
pub mod rooms;
pub mod tile;

pub mod prelude {
    //! Convenient re-exports of the generation pipeline types.
    pub use crate::astar::astar_path;
    pub use crate::bsp::{BspTree, Leaf, LeafId, SplitState};
    pub use crate::config::{GenerationConfig, LevelCounts, Scaling};
    pub use crate::error::GenerationError;
    pub use crate::map::{generate_level, generate_level_with, LevelConstants};
    pub use crate::tile::{Grid, TileType};
}
