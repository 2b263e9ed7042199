//! Generation constants and their per-level scaling.

use crate::error::GenerationError;
use crate::tile::TileType;
use log::info;

/// How many of each item type to aim for, as a share of the level's item
/// budget. Shares are turned into counts with `ceil(weight * item_count)`.
pub const ITEM_DISTRIBUTION: [(TileType, f32); 6] = [
    (TileType::HealthPotion, 0.3),
    (TileType::ArmourPotion, 0.3),
    (TileType::HealthBoostPotion, 0.2),
    (TileType::ArmourBoostPotion, 0.1),
    (TileType::SpeedBoostPotion, 0.05),
    (TileType::FireRateBoostPotion, 0.05),
];

/// Enemy type shares of the level's enemy budget.
pub const ENEMY_DISTRIBUTION: [(TileType, f32); 1] = [(TileType::Enemy, 1.0)];

/// An exponential per-level growth curve with a hard cap.
#[derive(Debug, Clone, Copy)]
pub struct Scaling {
    /// The value at level 0.
    pub base: f32,
    /// The multiplier applied per level.
    pub growth: f32,
    /// The value never grows past this.
    pub cap: i32,
}

impl Scaling {
    /// Creates a new growth curve.
    pub const fn new(base: f32, growth: f32, cap: i32) -> Self {
        Self { base, growth, cap }
    }

    /// The curve's value at the given level, rounded to the nearest integer.
    pub fn at_level(&self, level: i32) -> i32 {
        let scaled = (self.base * self.growth.powi(level)).round() as i32;
        scaled.min(self.cap)
    }
}

/// Every tunable of the generation pipeline, bundled into one immutable
/// record passed down the stages.
///
/// The defaults are the documented game values; hosts and tests override
/// individual fields through the builder methods.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Map width curve.
    pub width: Scaling,
    /// Map height curve.
    pub height: Scaling,
    /// BSP split budget curve.
    pub split_iterations: Scaling,
    /// Obstacle scatter curve.
    pub obstacle_count: Scaling,
    /// Item budget curve.
    pub item_count: Scaling,
    /// Enemy budget curve.
    pub enemy_count: Scaling,
    /// Minimum width/height of a BSP container.
    pub min_container_size: i32,
    /// Minimum width/height of a room.
    pub min_room_size: i32,
    /// How often a leaf re-rolls a badly proportioned room before giving up.
    pub room_create_tries: u32,
    /// Acceptable room width/height ratio range.
    pub room_ratio: (f32, f32),
    /// Side length of the square stamped along hallway paths (odd).
    pub hallway_size: i32,
    /// Extra connections must cost less than the dearest MST edge times this.
    pub extra_maximum_percentage: f32,
    /// Share of surviving extra-connection candidates that is kept.
    pub removed_connection_limit: f32,
    /// Smoothing generations run after hallway carving.
    pub cellular_automata_iterations: u32,
    /// Enemies never spawn closer to the player than this (Euclidean).
    pub safe_spawn_radius: f32,
    /// Placement attempts per entity type before giving up.
    pub place_tries: u32,
    /// Item type shares.
    pub item_distribution: &'static [(TileType, f32)],
    /// Enemy type shares.
    pub enemy_distribution: &'static [(TileType, f32)],
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: Scaling::new(30.0, 1.2, 150),
            height: Scaling::new(20.0, 1.2, 100),
            split_iterations: Scaling::new(5.0, 1.5, 25),
            obstacle_count: Scaling::new(20.0, 1.3, 200),
            item_count: Scaling::new(3.0, 1.1, 15),
            enemy_count: Scaling::new(7.0, 1.1, 20),
            min_container_size: 5,
            min_room_size: 4,
            room_create_tries: 5,
            room_ratio: (0.5, 2.0),
            hallway_size: 5,
            extra_maximum_percentage: 1.5,
            removed_connection_limit: 0.2,
            cellular_automata_iterations: 3,
            safe_spawn_radius: 5.0,
            place_tries: 5,
            item_distribution: &ITEM_DISTRIBUTION,
            enemy_distribution: &ENEMY_DISTRIBUTION,
        }
    }
}

impl GenerationConfig {
    /// Creates a configuration with the documented game values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of cellular automata smoothing generations.
    pub fn with_cellular_automata_iterations(mut self, iterations: u32) -> Self {
        self.cellular_automata_iterations = iterations;
        self
    }

    /// Sets the hallway stamp size (forced odd so paths stay centred).
    pub fn with_hallway_size(mut self, size: i32) -> Self {
        self.hallway_size = if size % 2 == 0 { size + 1 } else { size };
        self
    }

    /// Sets the minimum room size.
    pub fn with_min_room_size(mut self, size: i32) -> Self {
        self.min_room_size = size;
        self
    }

    /// Sets the obstacle scatter curve.
    pub fn with_obstacle_count(mut self, curve: Scaling) -> Self {
        self.obstacle_count = curve;
        self
    }
}

/// The constants derived for one concrete level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCounts {
    /// The level these counts were derived for.
    pub level: i32,
    /// Map width in tiles.
    pub width: i32,
    /// Map height in tiles.
    pub height: i32,
    /// BSP split budget.
    pub split_iterations: i32,
    /// Obstacles scattered before hallway carving.
    pub obstacle_count: i32,
    /// Total item budget.
    pub item_count: i32,
    /// Total enemy budget.
    pub enemy_count: i32,
    /// Per-type placement counts, enemies first, in declaration order.
    pub tile_counts: Vec<(TileType, u32)>,
}

impl LevelCounts {
    /// Derives the constants for a level. Pure: equal inputs give equal
    /// outputs, no randomness involved.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLevel`] for negative levels.
    pub fn derive(level: i32, config: &GenerationConfig) -> Result<Self, GenerationError> {
        if level < 0 {
            return Err(GenerationError::InvalidLevel(level));
        }

        let item_count = config.item_count.at_level(level);
        let enemy_count = config.enemy_count.at_level(level);

        let mut tile_counts = Vec::new();
        for &(tile, weight) in config.enemy_distribution {
            tile_counts.push((tile, (weight * enemy_count as f32).ceil() as u32));
        }
        for &(tile, weight) in config.item_distribution {
            tile_counts.push((tile, (weight * item_count as f32).ceil() as u32));
        }

        let counts = Self {
            level,
            width: config.width.at_level(level),
            height: config.height.at_level(level),
            split_iterations: config.split_iterations.at_level(level),
            obstacle_count: config.obstacle_count.at_level(level),
            item_count,
            enemy_count,
            tile_counts,
        };
        info!(
            "derived level {} constants: {}x{} map, {} splits, {} obstacles, {} enemies, {} items",
            level,
            counts.width,
            counts.height,
            counts.split_iterations,
            counts.obstacle_count,
            counts.enemy_count,
            counts.item_count
        );
        Ok(counts)
    }
}
