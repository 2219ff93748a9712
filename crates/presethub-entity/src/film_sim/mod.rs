//! Film simulation entity.

pub mod model;

pub use model::{CreateFilmSim, FilmSim};
