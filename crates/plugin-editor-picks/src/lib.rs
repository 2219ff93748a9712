//! # plugin-editor-picks
//!
//! Compiled-in plugin contributing editorially curated fragments: home
//! showcase cards, an "Editor picks" menu entry, a card badge, and a
//! sidebar panel on the preset detail page.

pub mod fragments;
pub mod plugin;

pub use plugin::EditorPicksPlugin;
