//! Built-in note table
//!
//! Sixteen notes, four per season.

use super::note::{Layer, Season};

/// (id, name, layer, season, longevity, sillage)
pub(crate) const BUILTIN_NOTES: [(&str, &str, Layer, Season, f64, f64); 16] = [
    ("BRG", "Bergamot", Layer::Top, Season::Spring, 3.0, 6.0),
    ("GTE", "Green Tea", Layer::Top, Season::Spring, 4.0, 4.0),
    ("ROS", "Rose", Layer::Mid, Season::Spring, 6.0, 7.0),
    ("PEO", "Peony", Layer::Mid, Season::Spring, 5.0, 6.0),
    ("LMN", "Lemon", Layer::Top, Season::Summer, 2.0, 8.0),
    ("LAV", "Lavender", Layer::Mid, Season::Summer, 5.0, 6.0),
    ("WMK", "White Musk", Layer::Base, Season::Summer, 8.0, 3.0),
    ("SDW", "Sandalwood", Layer::Base, Season::Autumn, 9.0, 5.0),
    ("AMB", "Amber", Layer::Base, Season::Autumn, 9.0, 6.0),
    ("VET", "Vetiver", Layer::Base, Season::Autumn, 8.0, 7.0),
    ("VNL", "Vanilla", Layer::Base, Season::Autumn, 8.0, 5.0),
    ("JAS", "Jasmine", Layer::Mid, Season::Winter, 7.0, 9.0),
    ("BPP", "Black Pepper", Layer::Mid, Season::Winter, 6.0, 8.0),
    ("PAT", "Patchouli", Layer::Base, Season::Winter, 10.0, 8.0),
    ("LTH", "Leather", Layer::Base, Season::Winter, 9.0, 7.0),
    ("CDW", "Cedarwood", Layer::Base, Season::Winter, 9.0, 5.0),
];
