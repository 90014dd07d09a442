//! Formulation Engine
//!
//! Turns a note selection into ingredient weights and a wear estimate.
//!
//! Each note gets a part count from its layer (base 5, mid 3, top 2), plus a
//! skin-type bonus. Parts are normalized into shares of the oil mass; the
//! remainder of the total mass is diluent.

use log::debug;

use crate::catalog::{Layer, Note};
use crate::error::Result;

use super::output::{Formulation, IngredientLine, PerformanceEstimate};
use super::request::{validate_amounts, validate_notes, FormulationRequest};
use super::skin::SkinType;

// ============================================================================
// Constants
// ============================================================================

/// Default display name of the carrier line
pub const DEFAULT_DILUENT_NAME: &str = "Alcohol (96°)";

const BASE_PARTS: u32 = 5;
const MID_PARTS: u32 = 3;
const TOP_PARTS: u32 = 2;

/// Scale from mean longevity rating to hours
const LONGEVITY_SCALE: f64 = 1.1;

/// Scale from mean sillage rating to metres
const DISTANCE_SCALE: f64 = 0.25;

// ============================================================================
// Helper Functions
// ============================================================================

/// Part count of a note before normalization
#[inline]
pub fn part_count(layer: Layer, skin: SkinType) -> u32 {
    let base = match layer {
        Layer::Base => BASE_PARTS,
        Layer::Mid => MID_PARTS,
        Layer::Top => TOP_PARTS,
    };
    base + skin.part_bonus(layer)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Stateless calculator for formulations and wear estimates
///
/// The only setting is the diluent display name; every computation is a pure
/// function of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulationEngine {
    diluent_name: String,
}

impl FormulationEngine {
    pub fn new() -> Self {
        Self {
            diluent_name: DEFAULT_DILUENT_NAME.to_string(),
        }
    }

    /// Use a different display name for the carrier line
    pub fn with_diluent_name(mut self, name: impl Into<String>) -> Self {
        self.diluent_name = name.into();
        self
    }

    pub fn diluent_name(&self) -> &str {
        &self.diluent_name
    }

    /// Compute ingredient lines for a selection
    ///
    /// Lines come back in selection order, followed by exactly one diluent
    /// line. Unrounded percentages across all lines sum to 100.
    ///
    /// # Errors
    /// `InvalidInput` if the selection is empty or repeats a note, if
    /// `total_mass <= 0`, or if `concentration_percent` is outside (0, 100].
    pub fn compute_formulation(
        &self,
        selection: &[Note],
        skin: SkinType,
        total_mass: f64,
        concentration_percent: f64,
    ) -> Result<Vec<IngredientLine>> {
        validate_notes(selection)?;
        validate_amounts(total_mass, concentration_percent)?;

        let oil_fraction = concentration_percent / 100.0;
        let oil_mass = total_mass * oil_fraction;
        let diluent_mass = total_mass - oil_mass;

        let parts: Vec<u32> = selection
            .iter()
            .map(|n| part_count(n.layer, skin))
            .collect();
        let total_parts: u32 = parts.iter().sum();

        let mut lines = Vec::with_capacity(selection.len() + 1);
        for (note, &p) in selection.iter().zip(&parts) {
            let share = p as f64 / total_parts as f64;
            lines.push(IngredientLine::aromatic(
                &note.id,
                &note.name,
                share * oil_fraction * 100.0,
                share * oil_mass,
            ));
        }
        lines.push(IngredientLine::diluent(
            &self.diluent_name,
            diluent_mass / total_mass * 100.0,
            diluent_mass,
        ));

        debug!(
            "Formulated {} notes ({} skin): oil {:.2}g, diluent {:.2}g, parts {:?}",
            selection.len(),
            skin,
            oil_mass,
            diluent_mass,
            parts
        );

        Ok(lines)
    }

    /// Estimate longevity and projected distance for a selection
    ///
    /// # Errors
    /// `InvalidInput` if the selection is empty or repeats a note.
    pub fn estimate_performance(
        &self,
        selection: &[Note],
        skin: SkinType,
    ) -> Result<PerformanceEstimate> {
        validate_notes(selection)?;

        let longevity =
            mean(selection.iter().map(|n| n.longevity)) * LONGEVITY_SCALE + skin.longevity_bonus();
        let distance =
            mean(selection.iter().map(|n| n.sillage)) * DISTANCE_SCALE * skin.distance_multiplier();

        Ok(PerformanceEstimate::new(longevity, distance))
    }

    /// Compute lines and performance for a full request
    pub fn formulate(&self, request: &FormulationRequest) -> Result<Formulation> {
        request.validate()?;
        let notes = request.selection.notes();
        let lines = self.compute_formulation(
            notes,
            request.skin,
            request.total_mass,
            request.concentration_percent,
        )?;
        let performance = self.estimate_performance(notes, request.skin)?;

        Ok(Formulation {
            skin: request.skin,
            total_mass: request.total_mass,
            concentration_percent: request.concentration_percent,
            lines,
            performance,
        })
    }
}

impl Default for FormulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// [`FormulationEngine::compute_formulation`] with the default diluent name
pub fn compute_formulation(
    selection: &[Note],
    skin: SkinType,
    total_mass: f64,
    concentration_percent: f64,
) -> Result<Vec<IngredientLine>> {
    FormulationEngine::new().compute_formulation(selection, skin, total_mass, concentration_percent)
}

/// [`FormulationEngine::estimate_performance`] with the default engine
pub fn estimate_performance(selection: &[Note], skin: SkinType) -> Result<PerformanceEstimate> {
    FormulationEngine::new().estimate_performance(selection, skin)
}
