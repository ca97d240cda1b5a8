use std::path::PathBuf;

use thiserror::Error;

use crate::interfaces::{PointOperatorFamily, Setting};

#[derive(Error, Debug)]
pub enum SymmetryError {
    #[error("Failed to read magnetic data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error in numbering of {table} point operators at line {line}: expected {expected}, found {found}")]
    PointOperatorNumbering {
        table: PointOperatorFamily,
        line: usize,
        expected: usize,
        found: i64,
    },

    #[error("Malformed magnetic data at line {line} ({record}, field `{field}`): {message}")]
    Parse {
        line: usize,
        record: String,
        field: String,
        message: String,
    },

    #[error("Point operator {index} is not part of the {family} table")]
    UnknownPointOperator {
        index: usize,
        family: PointOperatorFamily,
    },

    #[error("Unknown centering letter `{0}`")]
    UnknownCentering(String),

    #[error("Invalid group label `{0}`")]
    InvalidLabel(String),

    #[error("No magnetic space group with BNS label {part_1}.{part_2}")]
    GroupNotFound { part_1: u32, part_2: u32 },

    #[error("No magnetic space group with OG label {part_1}.{part_2}.{part_3}")]
    OgGroupNotFound { part_1: u32, part_2: u32, part_3: u32 },

    #[error("BNS label {part_1}.{part_2} matches {count} catalogue records")]
    DuplicateLabel { part_1: u32, part_2: u32, count: usize },

    #[error("Group {label} carries no {setting} setting data")]
    MissingSetting { label: String, setting: Setting },

    #[error("Cannot parse symmetry operation `{text}`: {message}")]
    Notation { text: String, message: String },
}
