//! A* pathfinding for hallway carving.
//!
//! An 8-connected search over the grid with unit cost for cardinal moves and
//! √2 for diagonals, using the Chebyshev distance as its heuristic (which
//! never over-estimates under this cost model). Obstacles block the search;
//! empty space, floors and walls are all fair game — hallways are allowed to
//! punch doorways through room walls.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f32::consts::SQRT_2;

use glam::IVec2;
use oubliette_geometry::prelude::{Chebyshev, DistanceAlgorithm};

use crate::tile::Grid;

/// Neighbour offsets: cardinals first, then diagonals.
const OFFSETS: [IVec2; 8] = [
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, 1),
    IVec2::new(-1, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(1, 1),
];

/// An entry of the open set.
///
/// The insertion sequence number makes heap ordering total: equal-cost
/// entries pop in insertion order, which keeps carved hallways identical
/// across runs and platforms.
#[derive(Debug, PartialEq)]
struct OpenNode {
    f: f32,
    seq: u64,
    pos: IVec2,
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a least-cost path between two tiles, inclusive of both ends.
///
/// Returns `None` when no path exists, which the hallway stage treats as a
/// dropped connection rather than an error — the spanning tree keeps the
/// dungeon connected without it.
pub fn astar_path(grid: &Grid, start: IVec2, goal: IVec2) -> Option<Vec<IVec2>> {
    if !grid.get(start).is_some_and(|t| t.is_carveable())
        || !grid.get(goal).is_some_and(|t| t.is_carveable())
    {
        return None;
    }

    let size = (grid.width() * grid.height()) as usize;
    let index = |pos: IVec2| (pos.y * grid.width() + pos.x) as usize;

    let mut open = BinaryHeap::new();
    let mut visited = vec![false; size];
    let mut g_score = vec![f32::INFINITY; size];
    let mut came_from: Vec<Option<IVec2>> = vec![None; size];
    let mut seq = 0u64;

    g_score[index(start)] = 0.0;
    open.push(OpenNode {
        f: Chebyshev.distance2d(start, goal),
        seq,
        pos: start,
    });

    while let Some(OpenNode { pos, .. }) = open.pop() {
        if visited[index(pos)] {
            continue;
        }
        visited[index(pos)] = true;

        if pos == goal {
            return Some(reconstruct(&came_from, index, start, goal));
        }

        for (i, offset) in OFFSETS.iter().enumerate() {
            let neighbour = pos + *offset;
            if !grid.get(neighbour).is_some_and(|t| t.is_carveable())
                || visited[index(neighbour)]
            {
                continue;
            }

            let step = if i < 4 { 1.0 } else { SQRT_2 };
            let tentative = g_score[index(pos)] + step;
            if tentative < g_score[index(neighbour)] {
                g_score[index(neighbour)] = tentative;
                came_from[index(neighbour)] = Some(pos);
                seq += 1;
                open.push(OpenNode {
                    f: tentative + Chebyshev.distance2d(neighbour, goal),
                    seq,
                    pos: neighbour,
                });
            }
        }
    }

    None
}

fn reconstruct(
    came_from: &[Option<IVec2>],
    index: impl Fn(IVec2) -> usize,
    start: IVec2,
    goal: IVec2,
) -> Vec<IVec2> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[index(current)].expect("broken parent chain");
        path.push(current);
    }
    path.reverse();
    path
}
