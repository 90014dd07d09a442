//! Accord - Perfume Formulation Engine
//!
//! Accord turns a handful of aromatic notes into a blend you can weigh out:
//! per-ingredient percentages and grams plus a diluent line, and a rough
//! estimate of how long the result lasts and how far it projects.
//!
//! # Architecture
//!
//! - `catalog`: the immutable note table (built-in or loaded from JSON)
//! - `formulation`: pure calculations over a note selection
//! - `sampler`: random example recipes for display
//! - `config`: optional JSON configuration
//! - `cli`: the `accord-cli` front end

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod formulation;
pub mod sampler;

pub use catalog::{Catalog, Layer, Note, Season};
pub use config::AccordConfig;
pub use error::{AccordError, Result};
pub use formulation::{
    compute_formulation, estimate_performance, Formulation, FormulationEngine,
    FormulationRequest, IngredientLine, PerformanceEstimate, Selection, SkinType,
};
