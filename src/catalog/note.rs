//! Note, Layer and Season value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccordError;

/// Olfactory layer of a note.
///
/// Top notes are perceived first and fade fastest; base notes anchor the
/// composition and last longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Top,
    Mid,
    Base,
}

impl Layer {
    /// All layers, top to base
    pub const ALL: [Layer; 3] = [Layer::Top, Layer::Mid, Layer::Base];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Top => "Top",
            Layer::Mid => "Mid",
            Layer::Base => "Base",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = AccordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Layer::Top),
            "mid" | "middle" | "heart" => Ok(Layer::Mid),
            "base" => Ok(Layer::Base),
            other => Err(AccordError::invalid_input(format!(
                "unknown layer '{}' (expected top, mid or base)",
                other
            ))),
        }
    }
}

/// Season a note is associated with.
///
/// Serialized with the two-letter codes used by catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "SP")]
    Spring,
    #[serde(rename = "SU")]
    Summer,
    #[serde(rename = "AU")]
    Autumn,
    #[serde(rename = "WI")]
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Two-letter catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Season::Spring => "SP",
            Season::Summer => "SU",
            Season::Autumn => "AU",
            Season::Winter => "WI",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = AccordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sp" | "spring" => Ok(Season::Spring),
            "su" | "summer" => Ok(Season::Summer),
            "au" | "autumn" | "fall" => Ok(Season::Autumn),
            "wi" | "winter" => Ok(Season::Winter),
            other => Err(AccordError::invalid_input(format!(
                "unknown season '{}' (expected SP, SU, AU or WI)",
                other
            ))),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Short unique code, e.g. `SDW`
    pub id: String,
    /// Display name
    pub name: String,
    pub layer: Layer,
    pub season: Season,
    /// Longevity rating (catalog units)
    #[serde(rename = "long")]
    pub longevity: f64,
    /// Sillage rating (catalog units)
    #[serde(rename = "sill")]
    pub sillage: f64,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        layer: Layer,
        season: Season,
        longevity: f64,
        sillage: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer,
            season,
            longevity,
            sillage,
        }
    }
}
