//! The flow field itself.

use std::time::Instant;

use glam::IVec2;
use hashbrown::HashMap;
use log::debug;
use oubliette_generation::prelude::Grid;
use pathfinding::prelude::dijkstra_all;

use crate::error::FlowFieldError;

/// Cardinal offsets used by the flood fill.
const CARDINAL_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, 1),
];

/// Full 8-neighbourhood offsets used by direction selection, in the scan
/// order that also breaks distance ties.
const DIAGONAL_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// A precomputed direction-per-tile field pointing at a common destination.
///
/// The field borrows the grid read-only; generation froze the grid before
/// any field is built, so the borrow is never contended. Rebuild whenever
/// the destination tile changes — typically when the chased target crosses
/// a tile boundary.
pub struct FlowField<'a> {
    grid: &'a Grid,
    distances: HashMap<IVec2, u32>,
    directions: HashMap<IVec2, IVec2>,
}

impl<'a> FlowField<'a> {
    /// Creates an empty field over a finished grid.
    ///
    /// No work happens until [`rebuild`](Self::rebuild) is called; queries on
    /// a fresh field answer `None`.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            distances: HashMap::new(),
            directions: HashMap::new(),
        }
    }

    /// Recomputes the field toward a new destination.
    ///
    /// Clears all previous state first, so rebuilding twice with the same
    /// destination yields identical maps.
    ///
    /// # Errors
    ///
    /// [`FlowFieldError::UnreachableDestination`] if the destination is
    /// outside the grid or not walkable.
    pub fn rebuild(&mut self, destination: IVec2) -> Result<(), FlowFieldError> {
        if !self
            .grid
            .get(destination)
            .is_some_and(|tile| tile.is_walkable())
        {
            return Err(FlowFieldError::UnreachableDestination(destination));
        }

        let start_time = Instant::now();
        self.distances.clear();
        self.directions.clear();

        // Pass 1: flood fill outward from the destination. Unit step costs
        // over the cardinal neighbourhood make Dijkstra identical to a
        // breadth-first fill, and the result is the Dijkstra map.
        let grid = self.grid;
        let parents = dijkstra_all(&destination, |&pos: &IVec2| {
            CARDINAL_OFFSETS.iter().filter_map(move |&offset| {
                let neighbour = pos + offset;
                grid.get(neighbour)
                    .is_some_and(|tile| tile.is_walkable())
                    .then_some((neighbour, 1u32))
            })
        });

        self.distances.insert(destination, 0);
        for (tile, (_, cost)) in parents {
            self.distances.insert(tile, cost);
        }

        // Pass 2: point every tile at its lowest-distance 8-neighbour. The
        // flood-fill parent is always among them, so every mapped tile gets
        // a direction; ties go to the first offset in scan order.
        for (tile, &dist) in &self.distances {
            if dist == 0 {
                self.directions.insert(*tile, IVec2::ZERO);
                continue;
            }

            let mut best: Option<(IVec2, u32)> = None;
            for offset in DIAGONAL_OFFSETS {
                let neighbour = *tile + offset;
                if let Some(&candidate) = self.distances.get(&neighbour) {
                    if best.is_none_or(|(_, current)| candidate < current) {
                        best = Some((neighbour, candidate));
                    }
                }
            }
            if let Some((neighbour, _)) = best {
                self.directions.insert(*tile, neighbour - *tile);
            }
        }

        debug!(
            "flow field toward {destination} rebuilt over {} tiles in {:?}",
            self.distances.len(),
            start_time.elapsed()
        );
        Ok(())
    }

    /// The direction to travel from a tile toward the destination, or `None`
    /// for tiles outside the field. The destination answers the zero vector.
    pub fn direction(&self, tile: IVec2) -> Option<IVec2> {
        self.directions.get(&tile).copied()
    }

    /// The flood-fill step distance from a tile to the destination, or
    /// `None` for tiles outside the field.
    pub fn distance(&self, tile: IVec2) -> Option<u32> {
        self.distances.get(&tile).copied()
    }

    /// Like [`direction`](Self::direction), but unreachable tiles are a
    /// typed error instead of `None`.
    ///
    /// # Errors
    ///
    /// [`FlowFieldError::UnknownTile`] for tiles outside the field.
    pub fn get_vector(&self, tile: IVec2) -> Result<IVec2, FlowFieldError> {
        self.direction(tile).ok_or(FlowFieldError::UnknownTile(tile))
    }

    /// The grid this field reads from.
    pub const fn grid(&self) -> &Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oubliette_generation::prelude::TileType;
    use oubliette_geometry::prelude::Rect;

    /// A 10x10 grid whose border is wall and whose interior (1,1)..(8,8) is
    /// open floor.
    fn open_room() -> Grid {
        let mut grid = Grid::new(10, 10);
        grid.place_rect(Rect::new(IVec2::new(0, 0), IVec2::new(9, 9)));
        grid
    }

    fn sorted_maps(field: &FlowField<'_>) -> (Vec<(IVec2, u32)>, Vec<(IVec2, IVec2)>) {
        let key = |v: &IVec2| (v.y, v.x);
        let mut distances: Vec<_> = field.distances.iter().map(|(k, v)| (*k, *v)).collect();
        let mut directions: Vec<_> = field.directions.iter().map(|(k, v)| (*k, *v)).collect();
        distances.sort_by_key(|(pos, _)| key(pos));
        directions.sort_by_key(|(pos, _)| key(pos));
        (distances, directions)
    }

    #[test]
    fn test_destination_is_zero_distance_and_vector() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);
        field.rebuild(IVec2::new(4, 4)).unwrap();

        assert_eq!(field.distance(IVec2::new(4, 4)), Some(0));
        assert_eq!(field.direction(IVec2::new(4, 4)), Some(IVec2::ZERO));
    }

    #[test]
    fn test_corner_tile_records_bfs_distance_but_cuts_diagonals() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);
        field.rebuild(IVec2::new(4, 4)).unwrap();

        // Cardinal flood fill: |4-1| + |4-1| = 6 steps.
        assert_eq!(field.distance(IVec2::new(1, 1)), Some(6));
        // Direction selection is 8-way: head straight for (2, 2).
        assert_eq!(field.direction(IVec2::new(1, 1)), Some(IVec2::new(1, 1)));
    }

    #[test]
    fn test_following_directions_reaches_destination() {
        let grid = open_room();
        let destination = IVec2::new(4, 4);
        let mut field = FlowField::new(&grid);
        field.rebuild(destination).unwrap();

        // Diagonal shortcutting means the walk takes at most the recorded
        // distance; from the corner it is exactly the Chebyshev 3.
        let mut pos = IVec2::new(1, 1);
        let mut steps = 0;
        while pos != destination {
            pos += field.direction(pos).expect("walk left the field");
            steps += 1;
            assert!(steps <= 6, "walk failed to terminate");
        }
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_every_mapped_tile_walks_home() {
        let grid = open_room();
        let destination = IVec2::new(2, 7);
        let mut field = FlowField::new(&grid);
        field.rebuild(destination).unwrap();

        for (start, expected) in field.distances.clone() {
            let mut pos = start;
            let mut steps = 0u32;
            while pos != destination {
                pos += field.direction(pos).unwrap();
                steps += 1;
                assert!(steps <= expected, "walk from {start} exceeded {expected}");
            }
            assert!(steps <= expected);
        }
    }

    #[test]
    fn test_chosen_neighbour_strictly_descends() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);
        field.rebuild(IVec2::new(6, 3)).unwrap();

        for (&tile, &dist) in &field.distances {
            if dist == 0 {
                continue;
            }
            let next = tile + field.direction(tile).unwrap();
            assert!(
                field.distance(next).unwrap() < dist,
                "no descent from {tile}"
            );
        }
    }

    #[test]
    fn test_wall_column_splits_the_field() {
        let mut grid = open_room();
        for y in 0..10 {
            grid.set(IVec2::new(5, y), TileType::Wall);
        }

        let mut field = FlowField::new(&grid);
        field.rebuild(IVec2::new(2, 4)).unwrap();

        // Everything right of the wall is unreachable.
        for y in 1..9 {
            for x in 6..9 {
                let tile = IVec2::new(x, y);
                assert_eq!(field.distance(tile), None);
                assert_eq!(
                    field.get_vector(tile),
                    Err(FlowFieldError::UnknownTile(tile))
                );
            }
        }
        // The near side still works.
        assert!(field.distance(IVec2::new(1, 1)).is_some());
    }

    #[test]
    fn test_rebuild_rejects_non_walkable_destination() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);

        // A wall, and out of bounds entirely.
        assert_eq!(
            field.rebuild(IVec2::new(0, 0)),
            Err(FlowFieldError::UnreachableDestination(IVec2::new(0, 0)))
        );
        assert_eq!(
            field.rebuild(IVec2::new(-3, 2)),
            Err(FlowFieldError::UnreachableDestination(IVec2::new(-3, 2)))
        );
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);

        field.rebuild(IVec2::new(3, 6)).unwrap();
        let first = sorted_maps(&field);

        field.rebuild(IVec2::new(3, 6)).unwrap();
        let second = sorted_maps(&field);

        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuild_clears_previous_destination() {
        let grid = open_room();
        let mut field = FlowField::new(&grid);

        field.rebuild(IVec2::new(1, 1)).unwrap();
        field.rebuild(IVec2::new(8, 8)).unwrap();

        assert_eq!(field.distance(IVec2::new(8, 8)), Some(0));
        assert_eq!(field.distance(IVec2::new(1, 1)), Some(14));
    }

    #[test]
    fn test_queries_before_rebuild_answer_none() {
        let grid = open_room();
        let field = FlowField::new(&grid);

        assert_eq!(field.direction(IVec2::new(4, 4)), None);
        assert_eq!(field.distance(IVec2::new(4, 4)), None);
    }

    #[test]
    fn test_entities_are_walkable_for_the_field() {
        let mut grid = open_room();
        grid.set(IVec2::new(4, 1), TileType::Enemy);
        grid.set(IVec2::new(5, 1), TileType::HealthPotion);

        let mut field = FlowField::new(&grid);
        field.rebuild(IVec2::new(4, 1)).unwrap();

        assert_eq!(field.distance(IVec2::new(5, 1)), Some(1));
    }
}
