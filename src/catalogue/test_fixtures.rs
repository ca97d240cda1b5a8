use crate::catalogue::MagneticCatalogue;
use crate::config::CatalogueConfig;

/// Six records in the catalogue text format: 1.1, 1.2, 2.4, 2.7, 71.536 and 168.109.
pub const EXCERPT: &str = include_str!("../../tests/data/magnetic_data_excerpt.txt");
pub const EXCERPT_GROUPS: usize = 6;

pub fn excerpt_config() -> CatalogueConfig {
    CatalogueConfig::default().with_expected_groups(EXCERPT_GROUPS)
}

pub fn excerpt_catalogue() -> MagneticCatalogue {
    MagneticCatalogue::parse(EXCERPT, &excerpt_config()).expect("fixture catalogue parses")
}

/// Header of the excerpt: both point-operator tables, no records.
pub fn point_operator_header() -> String {
    EXCERPT.lines().take(72).map(|line| format!("{}\n", line)).collect()
}
