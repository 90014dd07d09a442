//! Selection and request types
//!
//! Validation lives here so the engine can assume well-formed input once a
//! `Selection` or `FormulationRequest` exists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Note};
use crate::error::{AccordError, Result};

use super::skin::SkinType;

/// Ordered, non-empty set of distinct notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    notes: Vec<Note>,
}

impl Selection {
    /// Create a selection, rejecting empty lists and repeated note ids
    pub fn new(notes: Vec<Note>) -> Result<Self> {
        validate_notes(&notes)?;
        Ok(Self { notes })
    }

    /// Resolve note ids against a catalog, keeping the given order
    ///
    /// # Errors
    /// - `UnknownNote` if an id is not in the catalog
    /// - `InvalidInput` if `ids` is empty or names a note twice
    pub fn resolve<S: AsRef<str>>(catalog: &Catalog, ids: &[S]) -> Result<Self> {
        let notes = ids
            .iter()
            .map(|id| catalog.require(id.as_ref()).cloned())
            .collect::<Result<Vec<_>>>()?;
        Self::new(notes)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Never true for a selection built through `new` or `resolve`
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.id.as_str()).collect()
    }
}

/// Check that a note list is non-empty and has no repeated ids
pub(crate) fn validate_notes(notes: &[Note]) -> Result<()> {
    if notes.is_empty() {
        return Err(AccordError::invalid_input("selection is empty"));
    }
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        if !seen.insert(note.id.as_str()) {
            return Err(AccordError::invalid_input(format!(
                "note '{}' selected more than once",
                note.id
            )));
        }
    }
    Ok(())
}

/// Check mass and concentration bounds
pub(crate) fn validate_amounts(total_mass: f64, concentration_percent: f64) -> Result<()> {
    if !total_mass.is_finite() || total_mass <= 0.0 {
        return Err(AccordError::invalid_input(format!(
            "total mass must be greater than 0, got {}",
            total_mass
        )));
    }
    if !concentration_percent.is_finite()
        || concentration_percent <= 0.0
        || concentration_percent > 100.0
    {
        return Err(AccordError::invalid_input(format!(
            "concentration must be in (0, 100], got {}",
            concentration_percent
        )));
    }
    Ok(())
}

/// One formulation computation: what to blend, for whom, and how much
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulationRequest {
    pub selection: Selection,
    pub skin: SkinType,
    /// Total target mass in grams
    pub total_mass: f64,
    /// Aromatic oil as a percentage of total mass
    pub concentration_percent: f64,
}

impl FormulationRequest {
    pub fn new(
        selection: Selection,
        skin: SkinType,
        total_mass: f64,
        concentration_percent: f64,
    ) -> Result<Self> {
        validate_amounts(total_mass, concentration_percent)?;
        Ok(Self {
            selection,
            skin,
            total_mass,
            concentration_percent,
        })
    }

    /// Re-run all checks; used for requests built by deserialization
    pub fn validate(&self) -> Result<()> {
        validate_notes(self.selection.notes())?;
        validate_amounts(self.total_mass, self.concentration_percent)
    }
}
