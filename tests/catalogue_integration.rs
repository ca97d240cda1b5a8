//! End-to-end checks against the catalogue excerpt in `tests/data`.

use magnetic_space_groups::catalogue::MagneticCatalogue;
use magnetic_space_groups::config::{CatalogueConfig, DEFAULT_ROUNDING_DECIMALS};
use magnetic_space_groups::interfaces::{PointOperatorFamily, Setting};
use magnetic_space_groups::symmetries::{
    apply_to_moment, deduplicate, is_closed, multiplicity, parse_operation, to_text, Centering,
    NotationLabels,
};
use magnetic_space_groups::SymmetryError;
use nalgebra::Vector3;
use std::path::PathBuf;

fn excerpt_config() -> CatalogueConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/magnetic_data_excerpt.txt");
    CatalogueConfig::default()
        .with_data_path(path)
        .with_expected_groups(6)
}

fn catalogue() -> MagneticCatalogue {
    MagneticCatalogue::load(&excerpt_config()).expect("excerpt loads")
}

#[test]
fn lookup_71_536_has_valid_centering() {
    let catalogue = catalogue();
    let record = catalogue.find_by_bns_label(71, 536).unwrap();
    let centering = record.centering().unwrap();
    assert!(Centering::ALL.contains(&centering));
    assert_eq!(centering.letter(), "I");
}

#[test]
fn full_operator_sets_are_closed_and_deduplicated() {
    let catalogue = catalogue();
    for record in &catalogue {
        let family = record.point_operator_family();
        let operations = catalogue.full_operators_for(record, Setting::Bns, family).unwrap();
        assert!(is_closed(&operations), "{} not closed", record.bns_label);
        assert_eq!(deduplicate(&operations), operations);

        if record.is_type_4() {
            let og = catalogue.full_og_operators(record, family).unwrap();
            assert!(is_closed(&og), "OG setting of {} not closed", record.bns_label);
        }
    }
}

#[test]
fn generic_multiplicity_equals_largest_wyckoff_site() {
    let catalogue = catalogue();
    let point = Vector3::new(0.0713, 0.1826, 0.3391);
    for record in &catalogue {
        let operations = catalogue
            .full_operators(record.bns_label.part_1, record.bns_label.part_2, record.point_operator_family())
            .unwrap();
        assert_eq!(
            multiplicity(&operations, point, DEFAULT_ROUNDING_DECIMALS),
            record.bns.general_multiplicity().unwrap()
        );
    }
}

#[test]
fn grey_group_contains_time_inversion() {
    let catalogue = catalogue();
    let operations = catalogue
        .full_operators(1, 2, PointOperatorFamily::NonHexagonal)
        .unwrap();
    let labels = NotationLabels::default();
    let texts: Vec<String> = operations.iter().map(|op| to_text(op, &labels)).collect();
    assert_eq!(texts, vec!["x,y,z,+1", "x,y,z,-1"]);

    // moments use the plain rotation, so 1' leaves them unchanged
    let moments = apply_to_moment(&operations, &[Vector3::new(0.0, 0.0, 1.0)]);
    assert_eq!(moments[1][0], Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn anti_translation_round_trips_through_text() {
    let catalogue = catalogue();
    let operations = catalogue
        .full_operators(2, 7, PointOperatorFamily::NonHexagonal)
        .unwrap();
    let labels = NotationLabels::default();
    let text = to_text(&operations[2], &labels);
    assert_eq!(text, "x+1/2,y+1/2,z+1/2,-1");
    assert_eq!(parse_operation(&text, &labels).unwrap(), operations[2]);
}

#[test]
fn unknown_group_is_an_error() {
    let catalogue = catalogue();
    assert!(matches!(
        catalogue.full_operators(230, 149, PointOperatorFamily::NonHexagonal),
        Err(SymmetryError::GroupNotFound { part_1: 230, part_2: 149 })
    ));
}

#[test]
fn record_serializes_to_json() {
    let catalogue = catalogue();
    let record = catalogue.find_by_bns_label(2, 7).unwrap();
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["bns_label"]["text"], "2.7");
    assert_eq!(json["group_type"], "Type4");
    assert_eq!(json["og"]["operators"].as_array().unwrap().len(), 4);
}
