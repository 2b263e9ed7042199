//! Error types for level generation.

use thiserror::Error;

/// Errors that can occur while generating a level.
///
/// Transient problems (a badly proportioned room, an extra hallway with no
/// path, a failed entity placement) are recovered inside the pipeline and
/// never reach the caller; only structural failures do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Levels are counted from zero.
    #[error("Invalid level {0}: levels are counted from zero")]
    InvalidLevel(i32),

    /// The pipeline ended with too few rooms to connect. The caller can
    /// retry with a different seed.
    #[error("Grid build failed: only {rooms} room(s) could be placed")]
    GridBuildFailure {
        /// How many rooms survived room creation.
        rooms: usize,
    },
}
