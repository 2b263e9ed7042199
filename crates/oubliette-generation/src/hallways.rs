//! Hallway carving and map smoothing.
//!
//! Obstacles are scattered over the empty space first, then each selected
//! room connection is carved by stamping hallway-sized rects along an A*
//! path that routes around them. A few cellular automata generations finish
//! the job, rounding the carved shapes into something less rectilinear.

use glam::IVec2;
use log::{debug, warn};
use oubliette_geometry::prelude::Rect;
use oubliette_random::rng::Rng;

use crate::astar::astar_path;
use crate::config::GenerationConfig;
use crate::graph::Edge;
use crate::tile::{Grid, TileType};

/// The 4-neighbourhood used by the smoothing rule.
const CARDINAL_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, 1),
];

/// Scatters `count` obstacles over empty cells, without replacement.
///
/// Obstacles are what makes hallways interesting: A* has to bend around
/// them, so corridors wander instead of running straight between centers.
pub fn place_obstacles(grid: &mut Grid, count: i32, rng: &mut Rng) {
    let mut empty = grid.tiles_matching(TileType::Empty);
    rng.shuffle(&mut empty);
    let placed = empty.len().min(count.max(0) as usize);
    for &pos in empty.iter().take(placed) {
        grid.set(pos, TileType::Obstacle);
    }
    debug!("scattered {placed} obstacles");
}

/// Carves every selected connection into the grid.
///
/// Along each A* path, every point that is not already floor gets a square
/// of side `hallway_size` stamped over it (floor interior, wall perimeter).
/// A connection with no path is dropped: the spanning tree already keeps the
/// dungeon connected, so only an extra loop is lost.
pub fn carve_hallways(grid: &mut Grid, rooms: &[Rect], edges: &[Edge], config: &GenerationConfig) {
    for edge in edges {
        let start = rooms[edge.src].center();
        let goal = rooms[edge.dst].center();
        let Some(path) = astar_path(grid, start, goal) else {
            warn!("no hallway path from {start} to {goal}, dropping connection");
            continue;
        };

        debug!("carving hallway from {start} to {goal}");
        for point in path {
            if grid.get(point) == Some(TileType::Floor) {
                continue;
            }
            grid.place_rect(Rect::centred_on(point, config.hallway_size));
        }
    }
}

/// Runs the cellular automata smoothing generations.
///
/// Each generation reads from a snapshot and writes into the live grid, so
/// updates never cascade within one generation. The rule: an empty,
/// debug-wall or obstacle tile with three or more floor tiles in its
/// 4-neighbourhood becomes floor; floor stays floor; real walls are never
/// rewritten.
pub fn smooth_map(grid: &mut Grid, iterations: u32) {
    for generation in 0..iterations {
        let snapshot = grid.tiles().to_vec();
        let mut changed = 0usize;

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = IVec2::new(x, y);
                let idx = (y * grid.width() + x) as usize;
                if !snapshot[idx].is_wall_replaceable() {
                    continue;
                }
                if floor_neighbours(&snapshot, grid.width(), grid.height(), pos) >= 3 {
                    grid.set(pos, TileType::Floor);
                    changed += 1;
                }
            }
        }
        debug!("smoothing generation {generation} grew {changed} floor tiles");
    }
}

fn floor_neighbours(snapshot: &[TileType], width: i32, height: i32, pos: IVec2) -> u32 {
    let mut alive = 0;
    for offset in CARDINAL_OFFSETS {
        let n = pos + offset;
        if n.x < 0 || n.x >= width || n.y < 0 || n.y >= height {
            continue;
        }
        if snapshot[(n.y * width + n.x) as usize] == TileType::Floor {
            alive += 1;
        }
    }
    alive
}
