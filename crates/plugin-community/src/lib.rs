//! # plugin-community
//!
//! Compiled-in plugin contributing community-facing fragments: the
//! community menu entry, a spotlight card on the home showcase, and
//! footer links.

pub mod fragments;
pub mod plugin;

pub use plugin::CommunityPlugin;
