//! A probabilistic balanced ordered map (skip list) over `i64` keys.
//!
//! Nodes are kept in a slab arena and linked by index at every level,
//! with a geometrically distributed level generator providing the
//! randomized balancing. See [`SkipMap`] for the map itself and
//! [`GeometricLevelGenerator`] for seeding the randomness explicitly.

pub mod level_generator;
pub(crate) mod node;
pub mod skipmap;

pub use level_generator::{GeometricLevelGenerator, LevelGenerator};
pub use skipmap::{DeleteOutcome, InsertOutcome, Iter, SkipMap};
