//! The tile model: what a dungeon is made of.

use glam::IVec2;
use oubliette_geometry::prelude::Rect;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell of the dungeon grid.
///
/// The discriminants are stable across runs and releases so a host can map
/// them straight onto sprite indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TileType {
    /// Unused space outside rooms and hallways.
    Empty = 0,
    /// Walkable dungeon floor.
    Floor = 1,
    /// A wall keeping entities inside the dungeon.
    Wall = 2,
    /// A scattered blocker that hallway carving must route around.
    Obstacle = 3,
    /// A wall only drawn in debug builds of the host.
    DebugWall = 4,
    /// The player spawn tile.
    Player = 5,
    /// An enemy spawn tile.
    Enemy = 6,
    /// Restores health on pickup.
    HealthPotion = 7,
    /// Restores armour on pickup.
    ArmourPotion = 8,
    /// Raises maximum health.
    HealthBoostPotion = 9,
    /// Raises maximum armour.
    ArmourBoostPotion = 10,
    /// Temporarily raises movement speed.
    SpeedBoostPotion = 11,
    /// Temporarily raises fire rate.
    FireRateBoostPotion = 12,
}

impl TileType {
    /// Reconstructs a tile from its stable integer value.
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Empty,
            1 => Self::Floor,
            2 => Self::Wall,
            3 => Self::Obstacle,
            4 => Self::DebugWall,
            5 => Self::Player,
            6 => Self::Enemy,
            7 => Self::HealthPotion,
            8 => Self::ArmourPotion,
            9 => Self::HealthBoostPotion,
            10 => Self::ArmourBoostPotion,
            11 => Self::SpeedBoostPotion,
            12 => Self::FireRateBoostPotion,
            _ => return None,
        })
    }

    /// True for the floor and every entity standing on a floor tile.
    ///
    /// This is the tile set the flow field may route through.
    pub const fn is_walkable(self) -> bool {
        self.is_entity() || matches!(self, Self::Floor)
    }

    /// True for the player, enemies and items.
    pub const fn is_entity(self) -> bool {
        matches!(self, Self::Player | Self::Enemy) || self.is_item()
    }

    /// True for every pickup tile.
    pub const fn is_item(self) -> bool {
        matches!(
            self,
            Self::HealthPotion
                | Self::ArmourPotion
                | Self::HealthBoostPotion
                | Self::ArmourBoostPotion
                | Self::SpeedBoostPotion
                | Self::FireRateBoostPotion
        )
    }

    /// True for enemy spawn tiles.
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemy)
    }

    /// True if a stamped wall or the smoothing pass may overwrite this tile.
    pub const fn is_wall_replaceable(self) -> bool {
        matches!(self, Self::Empty | Self::Obstacle | Self::DebugWall)
    }

    /// True if hallway pathfinding may pass through this tile.
    ///
    /// Walls are carveable on purpose: a hallway crossing a room wall becomes
    /// the doorway into that room.
    pub const fn is_carveable(self) -> bool {
        matches!(self, Self::Empty | Self::Floor | Self::Wall)
    }

    /// An ASCII glyph for quick terminal dumps of a map.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Obstacle => 'o',
            Self::DebugWall => '+',
            Self::Player => '@',
            Self::Enemy => 'E',
            _ => '!',
        }
    }
}

/// The 2D dungeon map.
///
/// Constructed empty by the pipeline driver, mutated only during generation
/// and frozen afterwards; the flow field and the host only read it. Stored
/// row-major at one byte per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Creates a grid of the given dimensions filled with [`TileType::Empty`].
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileType::Empty; (width * height) as usize],
        }
    }

    /// Returns the grid width in tiles.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Returns the grid height in tiles.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if the position lies inside the grid.
    pub const fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Returns the tile at a position, or `None` outside the grid.
    pub fn get(&self, pos: IVec2) -> Option<TileType> {
        self.in_bounds(pos).then(|| self.tiles[self.index(pos)])
    }

    /// Sets the tile at a position. Writes outside the grid are ignored.
    pub fn set(&mut self, pos: IVec2, tile: TileType) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.tiles[idx] = tile;
        }
    }

    /// Returns the tiles as a row-major slice.
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Iterates over every tile with its position, in scan order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (IVec2, TileType)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (IVec2::new(i as i32 % width, i as i32 / width), tile))
    }

    /// Collects the positions of every tile equal to `target`, in scan order.
    pub fn tiles_matching(&self, target: TileType) -> Vec<IVec2> {
        self.iter_tiles()
            .filter_map(|(pos, tile)| (tile == target).then_some(pos))
            .collect()
    }

    /// Returns the first position holding `target`, in scan order.
    pub fn find_tile(&self, target: TileType) -> Option<IVec2> {
        self.iter_tiles()
            .find_map(|(pos, tile)| (tile == target).then_some(pos))
    }

    /// Stamps a walled rectangle into the grid.
    ///
    /// The perimeter becomes [`TileType::Wall`] wherever the current tile is
    /// replaceable; the interior becomes [`TileType::Floor`] unconditionally,
    /// clamped one tile inside the grid border. Floors overwrite walls so a
    /// hallway crossing a room wall opens a doorway, but walls never
    /// overwrite floors.
    pub fn place_rect(&mut self, rect: Rect) {
        let wall_min = rect.min.max(IVec2::ZERO);
        let wall_max = rect.max.min(IVec2::new(self.width - 1, self.height - 1));
        if wall_min.x > wall_max.x || wall_min.y > wall_max.y {
            return;
        }
        for pos in Rect::new(wall_min, wall_max).points() {
            if self.tiles[self.index(pos)].is_wall_replaceable() {
                self.set(pos, TileType::Wall);
            }
        }

        let floor_min = (rect.min + IVec2::ONE).max(IVec2::ONE);
        let floor_max = (rect.max - IVec2::ONE).min(IVec2::new(self.width - 2, self.height - 2));
        if floor_min.x > floor_max.x || floor_min.y > floor_max.y {
            return;
        }
        for pos in Rect::new(floor_min, floor_max).points() {
            self.set(pos, TileType::Floor);
        }
    }

    const fn index(&self, pos: IVec2) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}
