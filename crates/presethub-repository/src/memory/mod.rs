//! In-memory repository implementations backed by `DashMap`.

pub mod film_sim;
pub mod preset;

pub use film_sim::InMemoryFilmSimRepository;
pub use preset::InMemoryPresetRepository;
