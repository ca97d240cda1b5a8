// Symmetries module: Contains magnetic symmetry operations and the algebra built on them
// This module provides exact operator construction, centering, orbits and x,y,z notation

// ======================== MODULE DECLARATIONS ========================
pub mod centering;
pub mod group_operations;
pub mod notation;
pub mod orbits;
pub mod point_operators;
pub mod symmetry_operations;

mod _tests_notation;

// ======================== POINT OPERATORS ========================
pub use point_operators::{
    PointOperator,                  // struct - labelled integer rotation (index, label, xyz, matrix)
    PointOperatorTable,             // struct - 1-based table of point operators for one family
    integer_determinant,            // fn(m: &Matrix3<i32>) -> i32 - exact determinant
};

// PointOperatorTable impl methods:
//   get(&self, index: usize) -> Result<&PointOperator>             - 1-based lookup
//   matrix(&self, index: usize) -> Result<Matrix3<i32>>            - rotation of an entry
//   find_by_matrix(&self, matrix: &Matrix3<i32>) -> Option<&PointOperator> - reverse lookup

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    SymmetryOperation,              // struct - rotation, rational translation and time-reversal-scaled rotation
    OPERATION_SLOTS,                // const - 22 integer slots of the flat encoding
};
// SymmetryOperation impl methods:
//   new(rotation, translation, denominator, time_reversal) -> Self - creates operation
//   identity() -> Self                                             - creates identity operation
//   from_generator(table, generator) -> Result<Self>               - builds from a tabulated generator
//   to_slots(&self) / from_slots(&slots)                           - 22-slot integer encoding
//   time_reversal(&self) -> TimeReversal                           - sign read off the scaled block
//   normalized(&self) -> Self                                      - translation wrapped into [0, 1)
//   compose(&self, other: &Self) -> Self                           - composes two operations
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>              - applies operation to a point
//   order(&self) -> Option<usize>                                  - order modulo lattice translations

// ======================== CENTERING ========================
pub use centering::{
    Centering,                      // enum - Bravais centering letters (P A B C F I R Rrev H)
    CenteringVector,                // struct - centering translation with identity rotation blocks
    resolve_centering_for_bravais_letter, // fn(letter: &str) -> Result<Vec<CenteringVector>>
    centering_from_lattice_vectors, // fn(vectors: &[LatticeVector]) -> Vec<CenteringVector>
};

// ======================== GROUP OPERATIONS ========================
pub use group_operations::{
    build_operators,                // fn(table, generators) -> Result<Vec<SymmetryOperation>>
    combine_with_centering,         // fn(ops, centerings) -> Vec<SymmetryOperation> - all products, deduplicated
    deduplicate,                    // fn(ops) -> Vec<SymmetryOperation> - first occurrence wins
    find_equivalent,                // fn(ops, op) -> Option<usize>
    is_closed,                      // fn(ops) -> bool - closure under composition
};

// ======================== ORBITS ========================
pub use orbits::{
    apply_to_fractional,            // fn(ops, points) -> Vec<Vec<Vector3<f64>>> - [op][point], wrapped into the cell
    apply_to_moment,                // fn(ops, moments) -> Vec<Vec<Vector3<f64>>> - plain rotation only
    multiplicity,                   // fn(ops, point, decimals) -> usize
    multiplicities,                 // fn(ops, points, decimals) -> Vec<usize>
    unique_orbit,                   // fn(ops, point, decimals) -> Vec<Vector3<f64>>
};

// ======================== NOTATION ========================
pub use notation::{
    NotationLabels,                 // struct - axis and moment labels
    to_text,                        // fn(op, labels) -> String - "x-y+1/2,-y,-z,+1"
    to_text_with_moments,           // fn(op, labels) -> String - coordinate rows, moment rows, sign
    parse_operation,                // fn(text, labels) -> Result<SymmetryOperation> - inverse of to_text
};
