//! Integration Tests
//!
//! End-to-end tests for catalog loading, formulation and sampling.

use std::fs;

use accord::sampler::{sample_recipes, SamplerConfig};
use accord::{
    compute_formulation, estimate_performance, AccordConfig, Catalog, FormulationEngine,
    FormulationRequest, Layer, Note, Selection, SkinType,
};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper to resolve ids against the built-in catalog
fn select(ids: &[&str]) -> Vec<Note> {
    Selection::resolve(&Catalog::builtin(), ids)
        .unwrap()
        .notes()
        .to_vec()
}

/// Share of aromatic mass held by notes of `layer`
fn layer_share(notes: &[Note], skin: SkinType, layer: Layer) -> f64 {
    let lines = compute_formulation(notes, skin, 100.0, 25.0).unwrap();
    let oil: f64 = lines.iter().filter(|l| !l.is_diluent).map(|l| l.exact_grams).sum();
    let in_layer: f64 = notes
        .iter()
        .zip(&lines)
        .filter(|(n, _)| n.layer == layer)
        .map(|(_, l)| l.exact_grams)
        .sum();
    in_layer / oil
}

// === Formulation Invariants ===

#[test]
fn test_masses_sum_to_total() {
    let catalog = Catalog::builtin();
    let recipes = sample_recipes(
        &catalog,
        &SamplerConfig {
            count: 50,
            ..Default::default()
        },
        &mut StdRng::seed_from_u64(2024),
    )
    .unwrap();

    for recipe in &recipes {
        for skin in SkinType::ALL {
            for (mass, conc) in [(50.0, 20.0), (7.5, 100.0), (120.0, 0.5), (33.3, 37.0)] {
                let lines = compute_formulation(&recipe.notes, skin, mass, conc).unwrap();
                let grams: f64 = lines.iter().map(|l| l.exact_grams).sum();
                let pct: f64 = lines.iter().map(|l| l.exact_percent).sum();
                assert_relative_eq!(grams, mass, epsilon = 1e-9);
                assert_relative_eq!(pct, 100.0, epsilon = 1e-9);

                // Displayed grams drift by at most half a hundredth per line
                let shown: f64 = lines.iter().map(|l| l.grams.parse::<f64>().unwrap()).sum();
                assert!((shown - mass).abs() <= 0.005 * lines.len() as f64 + 1e-9);
            }
        }
    }
}

#[test]
fn test_line_order_and_diluent_last() {
    let notes = select(&["LAV", "PAT", "GTE"]);
    let lines = compute_formulation(&notes, SkinType::Oily, 40.0, 18.0).unwrap();
    let ids: Vec<_> = lines.iter().map(|l| l.note_id.as_deref()).collect();
    assert_eq!(ids, vec![Some("LAV"), Some("PAT"), Some("GTE"), None]);
    assert_eq!(lines.iter().filter(|l| l.is_diluent).count(), 1);
    assert!(lines.last().unwrap().is_diluent);
}

#[test]
fn test_deterministic_output() {
    let notes = select(&["AMB", "ROS", "LMN"]);
    for skin in SkinType::ALL {
        let a = compute_formulation(&notes, skin, 64.0, 22.0).unwrap();
        let b = compute_formulation(&notes, skin, 64.0, 22.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            estimate_performance(&notes, skin).unwrap(),
            estimate_performance(&notes, skin).unwrap()
        );
    }
}

#[test]
fn test_skin_type_shifts_layer_share() {
    let notes = select(&["BRG", "JAS", "SDW"]);

    let base_combo = layer_share(&notes, SkinType::Combination, Layer::Base);
    let base_dry = layer_share(&notes, SkinType::Dry, Layer::Base);
    assert!(base_dry > base_combo, "{} <= {}", base_dry, base_combo);

    let top_combo = layer_share(&notes, SkinType::Combination, Layer::Top);
    let top_oily = layer_share(&notes, SkinType::Oily, Layer::Top);
    assert!(top_oily > top_combo, "{} <= {}", top_oily, top_combo);

    // 5/10 vs 7/12
    assert_relative_eq!(base_combo, 0.5, epsilon = 1e-12);
    assert_relative_eq!(base_dry, 7.0 / 12.0, epsilon = 1e-12);
}

#[test]
fn test_worked_example_through_request() {
    let catalog = Catalog::builtin();
    let request = FormulationRequest::new(
        Selection::resolve(&catalog, &["SDW", "BRG"]).unwrap(),
        SkinType::Combination,
        50.0,
        20.0,
    )
    .unwrap();
    let formulation = FormulationEngine::new().formulate(&request).unwrap();

    let shown: Vec<(&str, &str)> = formulation
        .lines
        .iter()
        .map(|l| (l.percent.as_str(), l.grams.as_str()))
        .collect();
    assert_eq!(
        shown,
        vec![("14.3", "7.14"), ("5.7", "2.86"), ("80.0", "40.00")]
    );
    assert_eq!(formulation.performance.longevity, "6.6h");
    assert_eq!(formulation.performance.distance, "1.4m");
    assert_eq!(formulation.aromatic_lines().count(), 2);
    assert_eq!(formulation.diluent_line().unwrap().grams, "40.00");
    assert_relative_eq!(formulation.exact_mass_total(), 50.0, epsilon = 1e-9);
    assert_relative_eq!(formulation.exact_percent_total(), 100.0, epsilon = 1e-9);

    let json = serde_json::to_value(&formulation).unwrap();
    assert_eq!(json["skin"], "combination");
    assert_eq!(json["lines"][2]["is_diluent"], true);
}

#[test]
fn test_invalid_requests_produce_no_output() {
    let catalog = Catalog::builtin();
    let selection = Selection::resolve(&catalog, &["VET"]).unwrap();

    for (mass, conc) in [(0.0, 20.0), (-10.0, 20.0), (50.0, 0.0), (50.0, 100.01)] {
        let err = FormulationRequest::new(selection.clone(), SkinType::Dry, mass, conc)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT", "mass={} conc={}", mass, conc);
    }
    assert!(compute_formulation(&[], SkinType::Combination, 50.0, 20.0).is_err());
}

// === Catalog / Config Files ===

#[test]
fn test_catalog_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        r#"[
            {"id": "IRS", "name": "Iris", "layer": "Mid", "season": "SP", "long": 8, "sill": 4},
            {"id": "OUD", "name": "Oud", "layer": "Base", "season": "WI", "long": 12, "sill": 9}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::from_json_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.require("OUD").unwrap().longevity, 12.0);

    let notes = Selection::resolve(&catalog, &["IRS", "OUD"]).unwrap();
    let perf = estimate_performance(notes.notes(), SkinType::Combination).unwrap();
    assert_eq!(perf.longevity, "11.0h");
    assert_eq!(perf.distance, "1.6m");
}

#[test]
fn test_catalog_file_rejects_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"[
            {"id": "X", "name": "One", "layer": "Top", "season": "SU", "long": 1, "sill": 1},
            {"id": "X", "name": "Two", "layer": "Top", "season": "SU", "long": 1, "sill": 1}
        ]"#,
    )
    .unwrap();

    let err = Catalog::from_json_file(&path).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CATALOG");
}

#[test]
fn test_config_resolves_relative_catalog() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mini.json"),
        r#"[{"id": "M", "name": "Mint", "layer": "Top", "season": "SU", "long": 2, "sill": 5}]"#,
    )
    .unwrap();
    let config_path = dir.path().join("accord.json");
    fs::write(
        &config_path,
        r#"{"catalog_path": "mini.json", "diluent_name": "Ethanol", "defaults": {"skin": "dry"}}"#,
    )
    .unwrap();

    let config = AccordConfig::load(&config_path).unwrap();
    assert_eq!(config.defaults.skin, SkinType::Dry);

    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.len(), 1);

    let lines = config
        .engine()
        .compute_formulation(catalog.notes(), config.defaults.skin, 10.0, 10.0)
        .unwrap();
    assert_eq!(lines[1].name, "Ethanol");
    assert_eq!(lines[0].grams, "1.00");
}
