//! Preset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use presethub_core::types::{PresetId, UserId};

/// A film-simulation recipe shared on PresetHub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Unique preset identifier.
    pub id: PresetId,
    /// Display name of the recipe.
    pub name: String,
    /// URL-safe slug derived from the name.
    pub slug: String,
    /// Free-form description of the look the recipe produces.
    pub description: String,
    /// Slug of the base film simulation this recipe builds on.
    pub film_sim: String,
    /// The in-camera settings making up the recipe.
    pub settings: RecipeSettings,
    /// Tags for discovery (e.g. `"portrait"`, `"night"`).
    pub tags: Vec<String>,
    /// The user who published the recipe.
    pub author_id: UserId,
    /// When the recipe was published.
    pub created_at: DateTime<Utc>,
    /// When the recipe was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Preset {
    /// Create a new preset from creation data, assigning identity and
    /// timestamps.
    pub fn new(create: CreatePreset) -> Self {
        let now = Utc::now();
        Self {
            id: PresetId::new(),
            name: create.name,
            slug: create.slug,
            description: create.description,
            film_sim: create.film_sim,
            settings: create.settings,
            tags: create.tags,
            author_id: create.author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the preset carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Data required to publish a new preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePreset {
    /// Display name of the recipe.
    pub name: String,
    /// URL-safe slug.
    pub slug: String,
    /// Free-form description.
    pub description: String,
    /// Slug of the base film simulation.
    pub film_sim: String,
    /// The in-camera settings.
    pub settings: RecipeSettings,
    /// Discovery tags.
    pub tags: Vec<String>,
    /// The publishing user.
    pub author_id: UserId,
}

/// The in-camera settings that make up a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSettings {
    /// Dynamic range setting (e.g. `"DR200"`).
    pub dynamic_range: String,
    /// Highlight tone adjustment, typically -2..=4.
    pub highlight: i8,
    /// Shadow tone adjustment, typically -2..=4.
    pub shadow: i8,
    /// Color saturation adjustment, typically -4..=4.
    pub color: i8,
    /// Sharpness adjustment, typically -4..=4.
    pub sharpness: i8,
    /// Noise reduction adjustment, typically -4..=4.
    pub noise_reduction: i8,
    /// Grain effect strength.
    pub grain: GrainEffect,
    /// White balance mode (e.g. `"auto"`, `"daylight"`, `"5500K"`).
    pub white_balance: String,
    /// White balance shift on the red axis.
    pub wb_shift_red: i8,
    /// White balance shift on the blue axis.
    pub wb_shift_blue: i8,
    /// Upper ISO bound the author recommends, if any.
    pub iso_limit: Option<u32>,
}

/// Grain effect strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrainEffect {
    /// No simulated grain.
    #[default]
    Off,
    /// Subtle grain.
    Weak,
    /// Pronounced grain.
    Strong,
}
