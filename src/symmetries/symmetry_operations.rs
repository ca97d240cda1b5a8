use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalogue::records::OperatorGenerator;
use crate::interfaces::TimeReversal;
use crate::rational::{self, Fraction};
use crate::symmetries::notation::{self, NotationLabels};
use crate::symmetries::point_operators::{integer_determinant, PointOperatorTable};
use crate::Result;

/// Length of the flat integer encoding `[tx, ty, tz, d, R(9), M(9)]`.
pub const OPERATION_SLOTS: usize = 22;

/// Upper bound used when searching for the order of an operation.
const MAX_OPERATION_ORDER: usize = 24;

/// A magnetic symmetry operation: integer rotation, rational translation and the
/// time-reversal-scaled rotation that acts on moments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Translation numerators over `denominator`
    pub translation: Vector3<i64>,
    /// Shared translation denominator, never zero
    pub denominator: i64,
    /// Rotation acting on fractional coordinates
    pub rotation: Matrix3<i32>,
    /// Time reversal times `rotation`
    pub magnetic_rotation: Matrix3<i32>,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(
        rotation: Matrix3<i32>,
        translation: Vector3<i64>,
        denominator: i64,
        time_reversal: TimeReversal,
    ) -> Self {
        debug_assert!(denominator != 0, "operation with zero translation denominator");
        Self {
            translation,
            denominator,
            rotation,
            magnetic_rotation: rotation * time_reversal.sign(),
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self::new(
            Matrix3::identity(),
            Vector3::zeros(),
            1,
            TimeReversal::Even,
        )
    }

    /// Pure time reversal `1'`.
    pub fn time_inversion() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros(), 1, TimeReversal::Odd)
    }

    /// Look up the generator's point operator in `table` and attach its translation
    /// and time reversal verbatim.
    pub fn from_generator(table: &PointOperatorTable, generator: &OperatorGenerator) -> Result<Self> {
        let rotation = table.matrix(generator.point_operator)?;
        Ok(Self::new(
            rotation,
            Vector3::from(generator.translation),
            generator.denominator,
            generator.time_reversal,
        ))
    }

    pub fn to_slots(&self) -> [i64; OPERATION_SLOTS] {
        let mut slots = [0i64; OPERATION_SLOTS];
        slots[..3].copy_from_slice(self.translation.as_slice());
        slots[3] = self.denominator;
        for row in 0..3 {
            for col in 0..3 {
                slots[4 + 3 * row + col] = self.rotation[(row, col)] as i64;
                slots[13 + 3 * row + col] = self.magnetic_rotation[(row, col)] as i64;
            }
        }
        slots
    }

    pub fn from_slots(slots: &[i64; OPERATION_SLOTS]) -> Self {
        let block = |start: usize| Matrix3::from_fn(|row, col| slots[start + 3 * row + col] as i32);
        Self {
            translation: Vector3::new(slots[0], slots[1], slots[2]),
            denominator: slots[3],
            rotation: block(4),
            magnetic_rotation: block(13),
        }
    }

    /// Time reversal read off the first non-zero entry of the rotation, compared
    /// row by row with the scaled block.
    pub fn time_reversal(&self) -> TimeReversal {
        for row in 0..3 {
            for col in 0..3 {
                let plain = self.rotation[(row, col)];
                if plain != 0 {
                    return if self.magnetic_rotation[(row, col)] == plain {
                        TimeReversal::Even
                    } else {
                        TimeReversal::Odd
                    };
                }
            }
        }
        TimeReversal::Even
    }

    pub fn determinant(&self) -> i32 {
        integer_determinant(&self.rotation)
    }

    /// Translation components in lowest terms, not wrapped.
    pub fn translation_fractions(&self) -> [Fraction; 3] {
        [0usize, 1, 2].map(|i| rational::reduce(self.translation[i], self.denominator))
    }

    pub fn translation_f64(&self) -> Vector3<f64> {
        self.translation.map(|t| t as f64 / self.denominator as f64)
    }

    /// Canonical form: translation wrapped into `[0, 1)` over the smallest shared denominator.
    pub fn normalized(&self) -> Self {
        let (numerators, denominator) = rational::normalize_translation(self.translation_fractions());
        Self {
            translation: Vector3::from(numerators),
            denominator,
            rotation: self.rotation,
            magnetic_rotation: self.magnetic_rotation,
        }
    }

    /// Same operation modulo lattice translations.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }

    /// `self ∘ other`: apply `other` first. The result is normalized.
    pub fn compose(&self, other: &Self) -> Self {
        let rotated = self.rotation.map(|v| v as i64) * other.translation;
        let components = [0usize, 1, 2].map(|i| {
            rational::sum_fractions(&[
                (rotated[i], other.denominator),
                (self.translation[i], self.denominator),
            ])
        });
        let (numerators, denominator) = rational::normalize_translation(components);
        Self {
            translation: Vector3::from(numerators),
            denominator,
            rotation: self.rotation * other.rotation,
            magnetic_rotation: self.magnetic_rotation * other.magnetic_rotation,
        }
    }

    /// Apply symmetry operation to a point (no wrapping)
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        let rotation_f64 = self.rotation.map(|x| x as f64);
        rotation_f64 * point + self.translation_f64()
    }

    /// Rotate a moment with the plain rotation block.
    pub fn apply_moment(&self, moment: Vector3<f64>) -> Vector3<f64> {
        self.rotation.map(|x| x as f64) * moment
    }

    /// Smallest `n` with `selfⁿ` equal to the identity modulo lattice translations.
    pub fn order(&self) -> Option<usize> {
        let mut power = self.normalized();
        for n in 1..=MAX_OPERATION_ORDER {
            if power.is_identity() {
                return Some(n);
            }
            power = power.compose(self);
        }
        None
    }

    /// Check if this is the identity operation (modulo lattice translations)
    pub fn is_identity(&self) -> bool {
        let normalized = self.normalized();
        normalized.rotation == Matrix3::identity()
            && normalized.magnetic_rotation == Matrix3::identity()
            && normalized.translation == Vector3::zeros()
    }
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&notation::to_text(self, &NotationLabels::default()))
    }
}
