//! # presethub-core
//!
//! Core crate for PresetHub. Contains configuration schemas, typed
//! identifiers, the content filter, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PresetHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
