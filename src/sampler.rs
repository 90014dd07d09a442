//! Sample Recipes
//!
//! Random note combinations used to populate the diagram with example
//! recipes. Draws are without replacement within a recipe; pass a seeded
//! RNG for reproducible output.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Note, Season};
use crate::error::{AccordError, Result};

/// Default number of recipes generated
pub const DEFAULT_RECIPE_COUNT: usize = 200;

/// Upper bound on recipes per draw
pub const MAX_RECIPE_COUNT: usize = 100_000;

/// A sampled note combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: usize,
    pub ids: Vec<String>,
    pub notes: Vec<Note>,
    /// Season of the first drawn note
    pub primary_season: Season,
}

impl Recipe {
    pub fn contains(&self, note_id: &str) -> bool {
        self.ids.iter().any(|id| id == note_id)
    }
}

/// Recipe generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of recipes to draw
    pub count: usize,
    /// Fewest notes per recipe
    pub min_notes: usize,
    /// Most notes per recipe
    pub max_notes: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECIPE_COUNT,
            min_notes: 2,
            max_notes: 3,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_RECIPE_COUNT {
            return Err(AccordError::InvalidConfig {
                reason: format!(
                    "sampler count {} exceeds the limit of {}",
                    self.count, MAX_RECIPE_COUNT
                ),
            });
        }
        if self.min_notes == 0 || self.min_notes > self.max_notes {
            return Err(AccordError::InvalidConfig {
                reason: format!(
                    "sampler note range {}..={} is empty or starts at zero",
                    self.min_notes, self.max_notes
                ),
            });
        }
        Ok(())
    }
}

/// Draw sample recipes from a catalog
///
/// Each recipe size is chosen uniformly from `min_notes..=max_notes` and
/// capped at the catalog size.
pub fn sample_recipes<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &SamplerConfig,
    rng: &mut R,
) -> Result<Vec<Recipe>> {
    config.validate()?;

    let pool = catalog.notes();
    let mut recipes = Vec::with_capacity(config.count);
    for id in 0..config.count {
        let size = rng
            .gen_range(config.min_notes..=config.max_notes)
            .min(pool.len());
        let notes: Vec<Note> = pool.choose_multiple(rng, size).cloned().collect();
        // choose_multiple yields at least one note: size >= 1 and pool is non-empty
        let primary_season = notes[0].season;
        recipes.push(Recipe {
            id,
            ids: notes.iter().map(|n| n.id.clone()).collect(),
            notes,
            primary_season,
        });
    }

    debug!("Sampled {} recipes", recipes.len());
    Ok(recipes)
}

/// Recipes that include a given note
pub fn recipes_with_note<'a>(recipes: &'a [Recipe], note_id: &str) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| r.contains(note_id)).collect()
}
