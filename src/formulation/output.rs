//! Engine output values

use serde::{Deserialize, Serialize};

use super::skin::SkinType;

/// Fractional digits needed to print any finite f64 exactly
const EXACT_DIGITS: usize = 1074;

/// Format with `digits` decimals, rounding halves away from zero.
///
/// Rounding looks at the exact binary value, so `1.25` becomes `"1.3"` while
/// `9.95` (stored as 9.9499...) stays `"9.9"`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .map_or(false, |&d| d >= b'5');

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    out
}

/// Format a percentage for display (one decimal)
pub fn format_percent(value: f64) -> String {
    format_fixed(value, 1)
}

/// Format a mass in grams for display (two decimals)
pub fn format_grams(value: f64) -> String {
    format_fixed(value, 2)
}

/// One row of a formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Catalog id; `None` for the diluent
    pub note_id: Option<String>,
    pub name: String,
    /// Share of total mass, one decimal
    pub percent: String,
    /// Mass in grams, two decimals
    pub grams: String,
    /// True for the non-aromatic carrier line
    pub is_diluent: bool,
    /// Unrounded share of total mass
    pub exact_percent: f64,
    /// Unrounded mass in grams
    pub exact_grams: f64,
}

impl IngredientLine {
    pub(crate) fn aromatic(id: &str, name: &str, percent: f64, grams: f64) -> Self {
        Self {
            note_id: Some(id.to_string()),
            name: name.to_string(),
            percent: format_percent(percent),
            grams: format_grams(grams),
            is_diluent: false,
            exact_percent: percent,
            exact_grams: grams,
        }
    }

    pub(crate) fn diluent(name: &str, percent: f64, grams: f64) -> Self {
        Self {
            note_id: None,
            name: name.to_string(),
            percent: format_percent(percent),
            grams: format_grams(grams),
            is_diluent: true,
            exact_percent: percent,
            exact_grams: grams,
        }
    }
}

/// Projected wear performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    /// e.g. `"6.6h"`
    pub longevity: String,
    /// e.g. `"1.4m"`
    pub distance: String,
    pub longevity_hours: f64,
    pub distance_meters: f64,
}

impl PerformanceEstimate {
    pub(crate) fn new(longevity_hours: f64, distance_meters: f64) -> Self {
        Self {
            longevity: format!("{}h", format_fixed(longevity_hours, 1)),
            distance: format!("{}m", format_fixed(distance_meters, 1)),
            longevity_hours,
            distance_meters,
        }
    }
}

/// Ingredient lines and performance computed together for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulation {
    pub skin: SkinType,
    pub total_mass: f64,
    pub concentration_percent: f64,
    pub lines: Vec<IngredientLine>,
    pub performance: PerformanceEstimate,
}

impl Formulation {
    /// Aromatic lines only, in selection order
    pub fn aromatic_lines(&self) -> impl Iterator<Item = &IngredientLine> {
        self.lines.iter().filter(|l| !l.is_diluent)
    }

    /// The carrier line (always last)
    pub fn diluent_line(&self) -> Option<&IngredientLine> {
        self.lines.last().filter(|l| l.is_diluent)
    }

    /// Sum of unrounded percentages; 100 up to float error
    pub fn exact_percent_total(&self) -> f64 {
        self.lines.iter().map(|l| l.exact_percent).sum()
    }

    /// Sum of unrounded masses; `total_mass` up to float error
    pub fn exact_mass_total(&self) -> f64 {
        self.lines.iter().map(|l| l.exact_grams).sum()
    }
}
