//! Skin type classifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Layer;
use crate::error::AccordError;

/// Skin type of the wearer.
///
/// Dry skin holds base notes poorly, so they get extra weight and the
/// projected distance shrinks. Oily skin boosts projection and gets extra
/// top notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Dry,
    Oily,
    #[default]
    Combination,
}

impl SkinType {
    pub const ALL: [SkinType; 3] = [SkinType::Dry, SkinType::Oily, SkinType::Combination];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
        }
    }

    /// Extra parts added to a note of `layer` before normalization
    pub fn part_bonus(&self, layer: Layer) -> u32 {
        match (self, layer) {
            (SkinType::Dry, Layer::Base) => 2,
            (SkinType::Oily, Layer::Top) => 2,
            _ => 0,
        }
    }

    /// Flat hours added to the adjusted longevity
    pub fn longevity_bonus(&self) -> f64 {
        match self {
            SkinType::Dry => 1.2,
            _ => 0.0,
        }
    }

    /// Multiplier applied to the projected distance
    pub fn distance_multiplier(&self) -> f64 {
        match self {
            SkinType::Dry => 0.8,
            SkinType::Oily => 1.4,
            SkinType::Combination => 1.0,
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = AccordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dry" => Ok(SkinType::Dry),
            "oily" | "oil" => Ok(SkinType::Oily),
            "combination" | "com" | "combo" => Ok(SkinType::Combination),
            other => Err(AccordError::invalid_input(format!(
                "unknown skin type '{}' (expected dry, oily or combination)",
                other
            ))),
        }
    }
}
