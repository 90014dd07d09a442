//! CLI Command Implementations
//!
//! Each command resolves its inputs against the loaded catalog and
//! configuration, then prints either a table or JSON.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{Catalog, Layer, Note, Season};
use crate::config::AccordConfig;
use crate::error::Result;
use crate::formulation::{Formulation, FormulationRequest, Selection, SkinType};
use crate::sampler::{recipes_with_note, sample_recipes, Recipe, SamplerConfig};

/// List catalog notes, optionally filtered.
pub fn list_catalog(
    catalog: &Catalog,
    season: Option<Season>,
    layer: Option<Layer>,
    json: bool,
) -> Result<()> {
    let notes: Vec<&Note> = catalog
        .notes()
        .iter()
        .filter(|n| season.map_or(true, |s| n.season == s))
        .filter(|n| layer.map_or(true, |l| n.layer == l))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else {
        print!("{}", render_notes(&notes));
    }
    Ok(())
}

/// Show one note.
pub fn show_note(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let note = catalog.require(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        print!("{}", render_notes(&[note]));
    }
    Ok(())
}

/// Compute and print a formulation; missing parameters come from config.
pub fn formulate(
    catalog: &Catalog,
    config: &AccordConfig,
    ids: &[String],
    skin: Option<SkinType>,
    mass: Option<f64>,
    concentration: Option<f64>,
    json: bool,
) -> Result<()> {
    let request = FormulationRequest::new(
        Selection::resolve(catalog, ids)?,
        skin.unwrap_or(config.defaults.skin),
        mass.unwrap_or(config.defaults.total_mass),
        concentration.unwrap_or(config.defaults.concentration_percent),
    )?;
    info!(
        "Formulating {} ({} skin, {}g at {}%)",
        request.selection.ids().join("+"),
        request.skin,
        request.total_mass,
        request.concentration_percent
    );

    let formulation = config.engine().formulate(&request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&formulation)?);
    } else {
        print!("{}", render_formulation(&formulation));
    }
    Ok(())
}

/// Generate and print sample recipes.
pub fn sample(
    catalog: &Catalog,
    config: &AccordConfig,
    count: Option<usize>,
    seed: Option<u64>,
    with_note: Option<&str>,
    json: bool,
) -> Result<()> {
    let sampler = SamplerConfig {
        count: count.unwrap_or(config.sampler.count),
        ..config.sampler
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let recipes = sample_recipes(catalog, &sampler, &mut rng)?;
    let shown: Vec<&Recipe> = match with_note {
        Some(id) => {
            catalog.require(id)?;
            recipes_with_note(&recipes, id)
        }
        None => recipes.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        print!("{}", render_recipes(&shown));
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render notes as a fixed-width table
pub fn render_notes(notes: &[&Note]) -> String {
    let mut out = format!(
        "{:<5} {:<16} {:<5} {:<7} {:>5} {:>5}\n{:-<48}\n",
        "ID", "NAME", "LAYER", "SEASON", "LONG", "SILL", ""
    );
    for note in notes {
        out.push_str(&format!(
            "{:<5} {:<16} {:<5} {:<7} {:>5} {:>5}\n",
            note.id,
            note.name,
            note.layer.as_str(),
            note.season.code(),
            note.longevity,
            note.sillage
        ));
    }
    out
}

/// Render a formulation as a table followed by the performance estimate
pub fn render_formulation(formulation: &Formulation) -> String {
    let rule = format!("{:-<44}\n", "");
    let mut out = format!(
        "Formulation: {}g at {}% ({} skin)\n",
        formulation.total_mass, formulation.concentration_percent, formulation.skin
    );
    out.push_str(&rule);
    for line in &formulation.lines {
        let marker = if line.is_diluent { "*" } else { " " };
        out.push_str(&format!(
            "{}{:<24} {:>7}% {:>9}g\n",
            marker, line.name, line.percent, line.grams
        ));
    }
    out.push_str(&rule);
    out.push_str(&format!(
        "Longevity: {}   Projection: {}\n",
        formulation.performance.longevity, formulation.performance.distance
    ));
    out
}

/// Render recipes one per line
pub fn render_recipes(recipes: &[&Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes.\n".to_string();
    }
    recipes
        .iter()
        .map(|recipe| {
            format!(
                "#{:<4} {:<3} {}\n",
                recipe.id,
                recipe.primary_season.code(),
                recipe.ids.join(" + ")
            )
        })
        .collect()
}
