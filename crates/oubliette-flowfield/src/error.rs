//! Error types for flow field queries.

use glam::IVec2;
use thiserror::Error;

/// Errors that can occur when building or querying a flow field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowFieldError {
    /// The queried tile is outside the grid, not walkable, or unreachable
    /// from the current destination.
    #[error("Tile ({}, {}) is not part of the flow field", .0.x, .0.y)]
    UnknownTile(IVec2),

    /// The rebuild destination is not a walkable tile.
    #[error("Destination ({}, {}) is not walkable", .0.x, .0.y)]
    UnreachableDestination(IVec2),
}
