//! # presethub-repository
//!
//! Repository contracts for PresetHub content and their in-memory
//! implementations. Loading strategies depend only on the traits here;
//! the backing store is an implementation detail of this crate.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::{InMemoryFilmSimRepository, InMemoryPresetRepository};
pub use traits::{FilmSimRepository, PresetRepository};
