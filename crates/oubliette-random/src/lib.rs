//! Random number generation for the dungeon pipeline.
//!
//! # Overview
//!
//! `oubliette-random` wraps `rand` behind a small [`Rng`](rng::Rng) type so
//! every stage of level generation draws from one pseudo-random stream. It
//! includes:
//!
//! *   **RNG Wrapper:** A seeded random number generator (using `rand`).
//! *   **Weighted Choice:** Select items from a list with different probabilities.
//!
//! Seeding the stream from the level number (or a user seed) makes generation
//! fully reproducible — the property the whole test suite leans on.
//!
//! ## Basic Example
//!
//! ```rust
//! use oubliette_random::prelude::*;
//!
//! // Same seed, same dungeon.
//! let mut a = Rng::with_seed(99);
//! let mut b = Rng::with_seed(99);
//! assert_eq!(a.range(0, 1000), b.range(0, 1000));
//!
//! // Random chance
//! let mut rng = Rng::new();
//! if rng.chance(0.1) {
//!     println!("Rare layout!");
//! }
//! ```

pub mod rng;

pub mod prelude {
    //! Convenient re-exports of the random types.
    pub use crate::rng::*;
}
