//! Formulation
//!
//! Pure calculations from a note selection to ingredient weights and a
//! projected wear estimate. Nothing here keeps state between calls.

mod engine;
mod output;
mod request;
mod skin;

pub use engine::{
    compute_formulation, estimate_performance, part_count, FormulationEngine,
    DEFAULT_DILUENT_NAME,
};
pub use output::{format_grams, format_percent, Formulation, IngredientLine, PerformanceEstimate};
pub use request::{FormulationRequest, Selection};
pub use skin::SkinType;
