//! Configuration
//!
//! Optional JSON file holding the catalog location, formulation defaults and
//! sampler settings. Every field may be omitted.
//!
//! ```json
//! {
//!   "catalog_path": "notes.json",
//!   "defaults": { "skin": "oily", "total_mass": 50.0, "concentration_percent": 20.0 },
//!   "diluent_name": "Alcohol (96°)",
//!   "sampler": { "count": 200, "min_notes": 2, "max_notes": 3 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{AccordError, Result};
use crate::formulation::{FormulationEngine, SkinType, DEFAULT_DILUENT_NAME};
use crate::sampler::SamplerConfig;

/// Default total mass in grams
pub const DEFAULT_TOTAL_MASS: f64 = 50.0;

/// Default oil concentration (eau de parfum range)
pub const DEFAULT_CONCENTRATION: f64 = 20.0;

/// Values used when a formulate call leaves a parameter out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulationDefaults {
    pub skin: SkinType,
    pub total_mass: f64,
    pub concentration_percent: f64,
}

impl Default for FormulationDefaults {
    fn default() -> Self {
        Self {
            skin: SkinType::default(),
            total_mass: DEFAULT_TOTAL_MASS,
            concentration_percent: DEFAULT_CONCENTRATION,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordConfig {
    /// Catalog JSON file; the built-in catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    pub defaults: FormulationDefaults,
    pub diluent_name: String,
    pub sampler: SamplerConfig,
}

impl Default for AccordConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            defaults: FormulationDefaults::default(),
            diluent_name: DEFAULT_DILUENT_NAME.to_string(),
            sampler: SamplerConfig::default(),
        }
    }
}

impl AccordConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// A relative `catalog_path` is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AccordError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let mut config = Self::from_json_str(&fs::read_to_string(path)?)?;
        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(dir.join(catalog));
            }
        }
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        if !d.total_mass.is_finite() || d.total_mass <= 0.0 {
            return Err(AccordError::InvalidConfig {
                reason: format!("default total_mass must be positive, got {}", d.total_mass),
            });
        }
        if !d.concentration_percent.is_finite()
            || d.concentration_percent <= 0.0
            || d.concentration_percent > 100.0
        {
            return Err(AccordError::InvalidConfig {
                reason: format!(
                    "default concentration_percent must be in (0, 100], got {}",
                    d.concentration_percent
                ),
            });
        }
        if self.diluent_name.trim().is_empty() {
            return Err(AccordError::InvalidConfig {
                reason: "diluent_name is empty".to_string(),
            });
        }
        self.sampler.validate()
    }

    /// Build the catalog this configuration points at
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Engine configured with this diluent name
    pub fn engine(&self) -> FormulationEngine {
        FormulationEngine::new().with_diluent_name(self.diluent_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AccordConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AccordConfig::default());
        assert_eq!(config.defaults.skin, SkinType::Combination);
        assert_eq!(config.sampler.count, 200);
    }

    #[test]
    fn test_partial_override() {
        let config =
            AccordConfig::from_json_str(r#"{"defaults": {"skin": "oily"}, "sampler": {"count": 5}}"#)
                .unwrap();
        assert_eq!(config.defaults.skin, SkinType::Oily);
        assert_eq!(config.defaults.total_mass, DEFAULT_TOTAL_MASS);
        assert_eq!(config.sampler.count, 5);
        assert_eq!(config.sampler.max_notes, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AccordConfig::from_json_str(r#"{"defaults": {"total_mass": 0}}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let err = AccordConfig::from_json_str(r#"{"defaults": {"concentration_percent": 150}}"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let err = AccordConfig::from_json_str(r#"{"diluent_name": "  "}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let err = AccordConfig::from_json_str("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_builtin_catalog_when_no_path() {
        let config = AccordConfig::default();
        assert_eq!(config.catalog().unwrap().len(), 16);
        assert_eq!(config.engine().diluent_name(), DEFAULT_DILUENT_NAME);
    }
}
