//! Entity placement: the player, enemies and items.

use glam::IVec2;
use log::{debug, warn};
use oubliette_geometry::prelude::{DistanceAlgorithm, Pythagoras};
use oubliette_random::rng::Rng;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::tile::{Grid, TileType};

/// Stamps the player, then every enemy and item type, onto floor tiles.
///
/// All floor tiles are collected once and shuffled; placement pops from that
/// pool, so no tile is offered twice. The player takes the first tile. Each
/// entity type then gets up to its derived count, with a bounded number of
/// tries: a candidate inside the enemy-free radius around the player, or one
/// that is no longer plain floor, costs a try and is discarded.
///
/// Returns the player position.
///
/// # Errors
///
/// Returns [`GenerationError::GridBuildFailure`] if there is no floor to
/// spawn the player on.
pub fn place_entities(
    grid: &mut Grid,
    tile_counts: &[(TileType, u32)],
    config: &GenerationConfig,
    rng: &mut Rng,
) -> Result<IVec2, GenerationError> {
    let mut pool = grid.tiles_matching(TileType::Floor);
    rng.shuffle(&mut pool);

    let player = pool
        .pop()
        .ok_or(GenerationError::GridBuildFailure { rooms: 0 })?;
    grid.set(player, TileType::Player);
    debug!("player spawn at {player}");

    for &(tile, count) in tile_counts {
        let mut placed = 0u32;
        let mut tries = config.place_tries;
        while placed < count && tries > 0 {
            let Some(candidate) = pool.pop() else { break };

            if tile.is_enemy()
                && Pythagoras.distance2d(candidate, player) < config.safe_spawn_radius
            {
                debug!("{tile:?} candidate {candidate} too close to player");
                tries -= 1;
                continue;
            }
            if grid.get(candidate) != Some(TileType::Floor) {
                tries -= 1;
                continue;
            }

            grid.set(candidate, tile);
            placed += 1;
        }
        if placed < count {
            warn!("placed {placed}/{count} of {tile:?}");
        }
    }

    Ok(player)
}
