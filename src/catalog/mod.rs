//! Note Catalog
//!
//! The fixed, read-only table of notes every formulation draws from.
//! A catalog is validated once on construction and never mutated afterwards;
//! callers share it by reference.

mod builtin;
mod note;

pub use note::{Layer, Note, Season};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{AccordError, Result};

/// Immutable note catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    notes: Vec<Note>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in sixteen-note catalog
    pub fn builtin() -> Self {
        let notes = builtin::BUILTIN_NOTES
            .iter()
            .map(|&(id, name, layer, season, longevity, sillage)| {
                Note::new(id, name, layer, season, longevity, sillage)
            })
            .collect::<Vec<_>>();
        let index = notes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self { notes, index }
    }

    /// Build a catalog from a list of notes
    ///
    /// # Errors
    /// Returns `InvalidCatalog` if:
    /// - The list is empty
    /// - An id is empty or appears more than once
    /// - A longevity or sillage rating is not a positive finite number
    pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
        if notes.is_empty() {
            return Err(AccordError::InvalidCatalog {
                reason: "catalog contains no notes".to_string(),
            });
        }

        let mut index = HashMap::with_capacity(notes.len());
        for (i, note) in notes.iter().enumerate() {
            if note.id.trim().is_empty() {
                return Err(AccordError::InvalidCatalog {
                    reason: format!("note at position {} has an empty id", i),
                });
            }
            if !is_positive(note.longevity) {
                return Err(AccordError::InvalidCatalog {
                    reason: format!(
                        "note '{}' has invalid longevity {}",
                        note.id, note.longevity
                    ),
                });
            }
            if !is_positive(note.sillage) {
                return Err(AccordError::InvalidCatalog {
                    reason: format!("note '{}' has invalid sillage {}", note.id, note.sillage),
                });
            }
            if index.insert(note.id.clone(), i).is_some() {
                return Err(AccordError::InvalidCatalog {
                    reason: format!("duplicate note id '{}'", note.id),
                });
            }
        }

        debug!("Catalog validated: {} notes", notes.len());
        Ok(Self { notes, index })
    }

    /// Parse a catalog from a JSON array of notes
    pub fn from_json_str(json: &str) -> Result<Self> {
        let notes: Vec<Note> = serde_json::from_str(json)?;
        Self::from_notes(notes)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AccordError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            "Loaded catalog from {} ({} notes)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Look up a note by id
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.index.get(id).map(|&i| &self.notes[i])
    }

    /// Look up a note by id, failing with `UnknownNote`
    pub fn require(&self, id: &str) -> Result<&Note> {
        self.get(id).ok_or_else(|| AccordError::UnknownNote { id: id.to_string() })
    }

    /// All notes in catalog order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes associated with a season, in catalog order
    pub fn by_season(&self, season: Season) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.season == season).collect()
    }

    /// Notes in a layer, in catalog order
    pub fn by_layer(&self, layer: Layer) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.layer == layer).collect()
    }

    /// Serialize the catalog back to its JSON file format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.notes)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 16);

        let sdw = catalog.get("SDW").unwrap();
        assert_eq!(sdw.name, "Sandalwood");
        assert_eq!(sdw.layer, Layer::Base);
        assert_eq!(sdw.season, Season::Autumn);
        assert_eq!(sdw.longevity, 9.0);
        assert_eq!(sdw.sillage, 5.0);

        // Builtin table must itself pass validation
        assert!(Catalog::from_notes(catalog.notes().to_vec()).is_ok());
    }

    #[test]
    fn test_filters() {
        let catalog = Catalog::builtin();
        for season in Season::ALL {
            assert_eq!(catalog.by_season(season).len(), 4, "{}", season);
        }
        assert_eq!(catalog.by_layer(Layer::Top).len(), 3);
        assert_eq!(catalog.by_layer(Layer::Mid).len(), 5);
        assert_eq!(catalog.by_layer(Layer::Base).len(), 8);
    }

    #[test]
    fn test_require_unknown() {
        let catalog = Catalog::builtin();
        let err = catalog.require("NOPE").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_NOTE");
    }

    #[test]
    fn test_rejects_duplicates() {
        let notes = vec![
            Note::new("A", "A", Layer::Top, Season::Spring, 1.0, 1.0),
            Note::new("A", "A again", Layer::Mid, Season::Summer, 2.0, 2.0),
        ];
        let err = Catalog::from_notes(notes).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_rejects_bad_ratings() {
        let zero = vec![Note::new("A", "A", Layer::Top, Season::Spring, 0.0, 1.0)];
        assert!(Catalog::from_notes(zero).is_err());

        let nan = vec![Note::new("A", "A", Layer::Top, Season::Spring, 1.0, f64::NAN)];
        assert!(Catalog::from_notes(nan).is_err());

        let blank = vec![Note::new(" ", "A", Layer::Top, Season::Spring, 1.0, 1.0)];
        assert!(Catalog::from_notes(blank).is_err());

        assert!(Catalog::from_notes(Vec::new()).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed.notes(), catalog.notes());
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Catalog::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }
}
