//! The level generation driver.

use glam::IVec2;
use log::info;
use oubliette_geometry::prelude::Rect;
use oubliette_random::rng::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bsp::BspTree;
use crate::config::{GenerationConfig, LevelCounts};
use crate::error::GenerationError;
use crate::graph::{extra_connections, minimum_spanning_tree};
use crate::hallways::{carve_hallways, place_obstacles, smooth_map};
use crate::placement::place_entities;
use crate::rooms::build_rooms;
use crate::tile::Grid;

/// The host-facing constants of a generated level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelConstants {
    /// The level the map was generated for.
    pub level: i32,
    /// Map width in tiles.
    pub width: i32,
    /// Map height in tiles.
    pub height: i32,
}

/// Generates the map for a game level.
///
/// The random stream is seeded from the level number, so the same level
/// always produces the same map. Hosts that want per-run variety should use
/// [`generate_level_with`] and seed the [`Rng`] themselves.
///
/// # Errors
///
/// [`GenerationError::InvalidLevel`] for negative levels and
/// [`GenerationError::GridBuildFailure`] when fewer than two rooms could be
/// placed (retry with another seed).
///
/// # Example
///
/// ```
/// use oubliette_generation::prelude::*;
///
/// let (grid, constants) = generate_level(0).unwrap();
/// assert_eq!((constants.width, constants.height), (30, 20));
/// assert_eq!(grid.width(), 30);
/// ```
pub fn generate_level(level: i32) -> Result<(Grid, LevelConstants), GenerationError> {
    if level < 0 {
        return Err(GenerationError::InvalidLevel(level));
    }
    let mut rng = Rng::with_seed(level as u64);
    generate_level_with(level, &GenerationConfig::default(), &mut rng)
}

/// Generates the map for a game level with an explicit configuration and
/// random stream.
///
/// This is the reproducibility hook: the whole pipeline draws from `rng`
/// and nothing else, so equal `(level, config, seed)` triples give
/// byte-identical grids on every platform.
pub fn generate_level_with(
    level: i32,
    config: &GenerationConfig,
    rng: &mut Rng,
) -> Result<(Grid, LevelConstants), GenerationError> {
    let counts = LevelCounts::derive(level, config)?;
    let mut grid = Grid::new(counts.width, counts.height);

    let mut tree = BspTree::new(Rect::new(
        IVec2::ZERO,
        IVec2::new(counts.width - 1, counts.height - 1),
    ));
    tree.split(counts.split_iterations, config, rng);

    let rooms = build_rooms(&mut grid, &mut tree, config, rng);
    if rooms.len() < 2 {
        return Err(GenerationError::GridBuildFailure {
            rooms: rooms.len(),
        });
    }

    let mut connections = minimum_spanning_tree(&rooms);
    let extras = extra_connections(&rooms, &connections, config, rng);
    connections.extend(extras);

    place_obstacles(&mut grid, counts.obstacle_count, rng);
    carve_hallways(&mut grid, &rooms, &connections, config);
    smooth_map(&mut grid, config.cellular_automata_iterations);

    let player = place_entities(&mut grid, &counts.tile_counts, config, rng)?;
    info!(
        "generated level {level}: {} rooms, {} connections, player at {player}",
        rooms.len(),
        connections.len()
    );

    Ok((
        grid,
        LevelConstants {
            level,
            width: counts.width,
            height: counts.height,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;

    #[test]
    fn test_level_zero_dimensions() {
        let (grid, constants) = generate_level(0).unwrap();
        assert_eq!(constants, LevelConstants { level: 0, width: 30, height: 20 });
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
    }

    #[test]
    fn test_negative_level_is_rejected() {
        assert_eq!(
            generate_level(-3),
            Err(GenerationError::InvalidLevel(-3))
        );
    }

    #[test]
    fn test_same_seed_same_grid() {
        let config = GenerationConfig::default();

        let mut rng1 = Rng::with_seed(777);
        let (grid1, _) = generate_level_with(2, &config, &mut rng1).unwrap();

        let mut rng2 = Rng::with_seed(777);
        let (grid2, _) = generate_level_with(2, &config, &mut rng2).unwrap();

        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GenerationConfig::default();

        let (grid1, _) =
            generate_level_with(2, &config, &mut Rng::with_seed(1)).unwrap();
        let (grid2, _) =
            generate_level_with(2, &config, &mut Rng::with_seed(2)).unwrap();

        assert_ne!(grid1, grid2);
    }

    #[test]
    fn test_exactly_one_player() {
        let (grid, _) = generate_level(1).unwrap();
        assert_eq!(grid.tiles_matching(TileType::Player).len(), 1);
    }
}
