//! Sample catalogue used by the composition root and integration tests.

use tracing::info;

use presethub_core::result::AppResult;
use presethub_core::types::UserId;
use presethub_entity::film_sim::CreateFilmSim;
use presethub_entity::preset::{CreatePreset, GrainEffect, RecipeSettings};
use presethub_entity::{FilmSim, Preset};

use crate::traits::{FilmSimRepository, PresetRepository};

/// Load the sample catalogue into the given repositories.
///
/// Returns the number of (presets, film simulations) inserted.
pub async fn load_sample_content(
    presets: &dyn PresetRepository,
    film_sims: &dyn FilmSimRepository,
) -> AppResult<(usize, usize)> {
    let sims = sample_film_sims();
    let sim_count = sims.len();
    for create in sims {
        film_sims.insert(FilmSim::new(create)).await?;
    }

    let recipes = sample_presets();
    let preset_count = recipes.len();
    for create in recipes {
        presets.insert(Preset::new(create)).await?;
    }

    info!(
        presets = preset_count,
        film_sims = sim_count,
        "Sample catalogue loaded"
    );
    Ok((preset_count, sim_count))
}

fn sample_film_sims() -> Vec<CreateFilmSim> {
    vec![
        CreateFilmSim {
            name: "Provia".to_string(),
            slug: "provia".to_string(),
            description: "The standard profile: faithful color and moderate contrast."
                .to_string(),
            character: "neutral color, balanced tonality".to_string(),
            introduced_in: Some("X-Trans I".to_string()),
        },
        CreateFilmSim {
            name: "Velvia".to_string(),
            slug: "velvia".to_string(),
            description: "Vivid slide-film look with deep saturation and strong contrast."
                .to_string(),
            character: "saturated color, hard tonality".to_string(),
            introduced_in: Some("X-Trans I".to_string()),
        },
        CreateFilmSim {
            name: "Astia".to_string(),
            slug: "astia".to_string(),
            description: "Soft gradation tuned for skin tones.".to_string(),
            character: "soft color, soft tonality".to_string(),
            introduced_in: Some("X-Trans I".to_string()),
        },
        CreateFilmSim {
            name: "Classic Chrome".to_string(),
            slug: "classic-chrome".to_string(),
            description: "Documentary magazine look with muted color and hard shadows."
                .to_string(),
            character: "muted color, hard tonality".to_string(),
            introduced_in: Some("X-Trans II".to_string()),
        },
        CreateFilmSim {
            name: "Acros".to_string(),
            slug: "acros".to_string(),
            description: "Fine-grained monochrome with rich shadow detail.".to_string(),
            character: "monochrome, fine grain".to_string(),
            introduced_in: Some("X-Trans III".to_string()),
        },
    ]
}

fn sample_presets() -> Vec<CreatePreset> {
    let author = UserId::new();
    vec![
        CreatePreset {
            name: "Kodak Gold Afternoon".to_string(),
            slug: "kodak-gold-afternoon".to_string(),
            description: "Warm consumer-negative look for golden-hour walks.".to_string(),
            film_sim: "classic-chrome".to_string(),
            settings: RecipeSettings {
                dynamic_range: "DR200".to_string(),
                highlight: -1,
                shadow: 1,
                color: 2,
                sharpness: -1,
                noise_reduction: -4,
                grain: GrainEffect::Weak,
                white_balance: "daylight".to_string(),
                wb_shift_red: 3,
                wb_shift_blue: -4,
                iso_limit: Some(3200),
            },
            tags: vec!["warm".to_string(), "travel".to_string()],
            author_id: author,
        },
        CreatePreset {
            name: "Pacific Slide".to_string(),
            slug: "pacific-slide".to_string(),
            description: "Punchy coastal landscapes with dense blues.".to_string(),
            film_sim: "velvia".to_string(),
            settings: RecipeSettings {
                dynamic_range: "DR100".to_string(),
                highlight: 0,
                shadow: 2,
                color: 4,
                sharpness: 1,
                noise_reduction: -2,
                grain: GrainEffect::Off,
                white_balance: "auto".to_string(),
                wb_shift_red: -1,
                wb_shift_blue: 2,
                iso_limit: Some(800),
            },
            tags: vec!["landscape".to_string(), "saturated".to_string()],
            author_id: author,
        },
        CreatePreset {
            name: "Night Walk".to_string(),
            slug: "night-walk".to_string(),
            description: "Halation-friendly recipe for neon and wet asphalt.".to_string(),
            film_sim: "classic-chrome".to_string(),
            settings: RecipeSettings {
                dynamic_range: "DR400".to_string(),
                highlight: -2,
                shadow: 2,
                color: 1,
                sharpness: -2,
                noise_reduction: -4,
                grain: GrainEffect::Strong,
                white_balance: "3200K".to_string(),
                wb_shift_red: 2,
                wb_shift_blue: 4,
                iso_limit: Some(12800),
            },
            tags: vec!["night".to_string(), "street".to_string()],
            author_id: author,
        },
        CreatePreset {
            name: "Quiet Portrait".to_string(),
            slug: "quiet-portrait".to_string(),
            description: "Gentle skin rendering with restrained color.".to_string(),
            film_sim: "astia".to_string(),
            settings: RecipeSettings {
                dynamic_range: "DR200".to_string(),
                highlight: -1,
                shadow: -1,
                color: -1,
                sharpness: -2,
                noise_reduction: 0,
                grain: GrainEffect::Off,
                white_balance: "auto".to_string(),
                wb_shift_red: 1,
                wb_shift_blue: -1,
                iso_limit: None,
            },
            tags: vec!["portrait".to_string()],
            author_id: author,
        },
        CreatePreset {
            name: "Press Mono".to_string(),
            slug: "press-mono".to_string(),
            description: "High-contrast monochrome for street reportage.".to_string(),
            film_sim: "acros".to_string(),
            settings: RecipeSettings {
                dynamic_range: "DR400".to_string(),
                highlight: 2,
                shadow: 3,
                color: 0,
                sharpness: 1,
                noise_reduction: -4,
                grain: GrainEffect::Strong,
                white_balance: "auto".to_string(),
                wb_shift_red: 0,
                wb_shift_blue: 0,
                iso_limit: Some(6400),
            },
            tags: vec!["street".to_string(), "mono".to_string()],
            author_id: author,
        },
    ]
}
