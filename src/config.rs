// Constants

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Catalogue layout
pub const MAGNETIC_GROUP_COUNT: usize = 1651;
pub const NON_HEXAGONAL_POINT_OPERATORS: usize = 48;
pub const HEXAGONAL_POINT_OPERATORS: usize = 24;
pub const OPERATORS_PER_LINE: usize = 4; // Generators are packed four to a physical line
pub const OPERATOR_FIELDS: usize = 6;
pub const LATTICE_VECTOR_FIELDS: usize = 4;

// Orbits
pub const DEFAULT_ROUNDING_DECIMALS: u32 = 6; // Collapses float round-off, keeps generic positions apart
pub const MAX_ROUNDING_DECIMALS: u32 = 15; // Finest rounding f64 still resolves in [0, 1)

// Data source
pub const DATA_PATH_ENV: &str = "MAGNETIC_DATA_PATH";
pub const DEFAULT_DATA_PATH: &str = "data/magnetic_data.txt";

/// Where the catalogue is read from and how many records it must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    pub data_path: PathBuf,
    pub expected_groups: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            expected_groups: MAGNETIC_GROUP_COUNT,
        }
    }
}

impl CatalogueConfig {
    /// Default configuration with the data path overridden by `MAGNETIC_DATA_PATH` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::default().with_data_path(path),
            _ => Self::default(),
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_expected_groups(mut self, count: usize) -> Self {
        self.expected_groups = count;
        self
    }
}
