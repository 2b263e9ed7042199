//! Distance algorithms for 2D grids.
//!
//! The generation pipeline needs two metrics: Euclidean distance for room
//! graph edge costs and spawn-radius checks, and Chebyshev distance as the
//! admissible heuristic for 8-connected A* with diagonal movement.
//!
//! # Example
//!
//! ```rust
//! use oubliette_geometry::prelude::*;
//!
//! let start = IVec2::new(0, 0);
//! let end = IVec2::new(3, 4);
//!
//! // Euclidean distance (sqrt(3² + 4²) = 5)
//! assert_eq!(Pythagoras.distance2d(start, end), 5.0);
//!
//! // Chebyshev distance (max(3, 4) = 4)
//! assert_eq!(Chebyshev.distance2d(start, end), 4.0);
//! ```

use glam::IVec2;
use std::ops::Sub;

/// Trait for 2D distance algorithms.
pub trait DistanceAlgorithm {
    /// Calculate the distance between two 2D points.
    fn distance2d(self, start: IVec2, end: IVec2) -> f32;
}

/// Chebyshev distance: `max(|dx|, |dy|)`.
///
/// The step-count metric on an 8-connected grid when diagonal moves cost the
/// same as cardinal moves. Admissible and consistent as an A* heuristic for
/// the 1 / √2 cost model, since it never exceeds the true cost of any move
/// sequence.
pub struct Chebyshev;

impl DistanceAlgorithm for Chebyshev {
    fn distance2d(self, start: IVec2, end: IVec2) -> f32 {
        let start = start.as_vec2();
        let end = end.as_vec2();
        start.sub(end).abs().max_element()
    }
}

/// Euclidean distance: `sqrt(dx² + dy²)`.
///
/// True straight-line distance. More expensive due to sqrt.
pub struct Pythagoras;

impl DistanceAlgorithm for Pythagoras {
    fn distance2d(self, start: IVec2, end: IVec2) -> f32 {
        let distance_squared = PythagorasSquared.distance2d(start, end);
        f32::sqrt(distance_squared)
    }
}

/// Squared Euclidean distance: `dx² + dy²`.
///
/// Faster than [`Pythagoras`] for comparisons since it avoids sqrt.
/// Use when you only need to compare distances, not get actual values.
pub struct PythagorasSquared;

impl DistanceAlgorithm for PythagorasSquared {
    fn distance2d(self, start: IVec2, end: IVec2) -> f32 {
        let distance = start.sub(end).as_vec2().abs();
        distance.x * distance.x + distance.y * distance.y
    }
}
