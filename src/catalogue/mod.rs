// Catalogue module: the tabulated magnetic space groups and their point-operator tables
// This module reads the positional catalogue text into typed records and answers lookups

// ======================== MODULE DECLARATIONS ========================
pub mod magnetic_catalogue;
pub mod parser;
pub mod reader;
pub mod records;

#[cfg(test)]
pub(crate) mod test_fixtures;


// ======================== RECORDS ========================
pub use records::{
    BnsLabel,                       // struct - BNS number (part_1.part_2) with its text form
    OgLabel,                        // struct - OG number (part_1.part_2.part_3) with its text form
    GroupType,                      // enum - magnetic group type 1 to 4
    OperatorGenerator,              // struct - point-operator index, translation, denominator, time reversal
    LatticeVector,                  // struct - centering/lattice translation over a denominator
    WyckoffPosition,                // struct - offset, free-parameter matrix and moment matrix of a site
    WyckoffSite,                    // struct - multiplicity, letter and representative positions
    SettingData,                    // struct - generators, lattice vectors and Wyckoff sites of one setting
    BnsOgTransform,                 // struct - BNS to OG change of setting (type 4 only)
    MagneticGroupRecord,            // struct - one catalogue entry with BNS and optional OG data
};

// WyckoffPosition impl methods:
//   coordinates(&self, free: Vector3<f64>) -> Vector3<f64>         - fractional position for free parameters
//   moment(&self, free: Vector3<f64>) -> Vector3<f64>              - allowed moment for free components

// MagneticGroupRecord impl methods:
//   space_group_number(&self) -> u32                               - BNS part_1
//   point_operator_family(&self) -> PointOperatorFamily            - table suggested by the space-group number
//   centering(&self) -> Result<Centering>                          - Bravais centering of the BNS symbol
//   setting(&self, setting: Setting) -> Result<&SettingData>       - BNS data, or OG data for type 4

// ======================== PARSING ========================
pub use reader::{LineCursor, Row}; // struct - positional line cursor / tokens of one physical line
pub use parser::{
    ParsedCatalogue,                // struct - both point-operator tables and all records
    parse_catalogue,                // fn(text: &str, expected_groups: usize) -> Result<ParsedCatalogue>
};

// ======================== CATALOGUE SERVICE ========================
pub use magnetic_catalogue::{
    MagneticCatalogue,              // struct - immutable catalogue with lookups and operator assembly
    ClosureReport,                  // struct - closure check outcome for one group
};

// MagneticCatalogue impl methods:
//   parse(text: &str, config: &CatalogueConfig) -> Result<Self>    - parses catalogue text
//   load(config: &CatalogueConfig) -> Result<Self>                 - reads and parses the data file
//   global() -> Result<&'static Self>                              - process-wide catalogue (OnceLock)
//   find_by_bns_label(&self, part_1, part_2) -> Result<&MagneticGroupRecord>
//   find_by_bns_number(&self, "71.536") -> Result<&MagneticGroupRecord>
//   find_by_og_label(&self, part_1, part_2, part_3) -> Result<&MagneticGroupRecord>
//   operators_with_centering(&self, part_1, part_2, family) -> Result<(Vec<SymmetryOperation>, Vec<CenteringVector>)>
//   full_operators(&self, part_1, part_2, family) -> Result<Vec<SymmetryOperation>>
//   full_og_operators(&self, record, family) -> Result<Vec<SymmetryOperation>>
//   verify_closure(&self) -> Vec<ClosureReport>                    - rayon-parallel with the `parallel` feature
