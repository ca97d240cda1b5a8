use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::interfaces::PointOperatorFamily;
use crate::Result;

/// One row of a point-operator table: a labelled integer rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOperator {
    /// 1-based position in its table
    pub index: usize,
    /// Seitz-style label, e.g. `2z`, `-3+`, `mx`
    pub label: String,
    /// Action on coordinates, e.g. `-y,x-y,z`
    pub xyz: String,
    /// Rotation acting on fractional coordinates (row-major in the data file)
    pub matrix: Matrix3<i32>,
}

impl PointOperator {
    pub fn determinant(&self) -> i32 {
        integer_determinant(&self.matrix)
    }

    /// True for rotations (det +1), false for rotoinversions (det -1).
    pub fn is_proper(&self) -> bool {
        self.determinant() > 0
    }
}

/// Ordered point-operator table for one lattice family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOperatorTable {
    family: PointOperatorFamily,
    operators: Vec<PointOperator>,
}

impl PointOperatorTable {
    /// Wraps operators already numbered `1..=n` in table order.
    pub fn new(family: PointOperatorFamily, operators: Vec<PointOperator>) -> Self {
        debug_assert!(operators
            .iter()
            .enumerate()
            .all(|(i, op)| op.index == i + 1));
        Self { family, operators }
    }

    pub fn family(&self) -> PointOperatorFamily {
        self.family
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOperator> {
        self.operators.iter()
    }

    /// Operator by 1-based index.
    pub fn get(&self, index: usize) -> Result<&PointOperator> {
        index
            .checked_sub(1)
            .and_then(|i| self.operators.get(i))
            .ok_or(SymmetryError::UnknownPointOperator {
                index,
                family: self.family,
            })
    }

    pub fn matrix(&self, index: usize) -> Result<Matrix3<i32>> {
        self.get(index).map(|op| op.matrix)
    }

    pub fn find_by_matrix(&self, matrix: &Matrix3<i32>) -> Option<&PointOperator> {
        self.operators.iter().find(|op| &op.matrix == matrix)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&PointOperator> {
        self.operators.iter().find(|op| op.label == label)
    }
}

/// Exact determinant of an integer 3x3 matrix.
pub fn integer_determinant(m: &Matrix3<i32>) -> i32 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}
