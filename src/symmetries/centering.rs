use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalogue::records::LatticeVector;
use crate::error::SymmetryError;
use crate::interfaces::TimeReversal;
use crate::rational::{self, Fraction};
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::Result;

/// Identity rotation blocks of a centering vector (coordinate and moment).
pub const CENTERING_BLOCK_SLOTS: usize = 18;

/// Translation slots plus the block slots.
pub const CENTERING_SLOTS: usize = 4 + CENTERING_BLOCK_SLOTS;

/// A pure centering translation with identity rotation blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenteringVector {
    pub translation: Vector3<i64>,
    pub denominator: i64,
    pub rotation: Matrix3<i32>,
    pub magnetic_rotation: Matrix3<i32>,
}

impl CenteringVector {
    pub fn new(numerators: [i64; 3], denominator: i64) -> Self {
        debug_assert!(denominator != 0, "centering with zero denominator");
        Self {
            translation: Vector3::from(numerators),
            denominator,
            rotation: Matrix3::identity(),
            magnetic_rotation: Matrix3::identity(),
        }
    }

    pub fn zero() -> Self {
        Self::new([0, 0, 0], 1)
    }

    /// `[tx, ty, tz, d]` followed by the 18 block slots (R then M, row-major).
    pub fn to_slots(&self) -> [i64; CENTERING_SLOTS] {
        let mut slots = [0i64; CENTERING_SLOTS];
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

    pub fn from_slots(slots: &[i64; CENTERING_SLOTS]) -> Self {
        let block = |start: usize| Matrix3::from_fn(|row, col| slots[start + 3 * row + col] as i32);
        Self {
            translation: Vector3::new(slots[0], slots[1], slots[2]),
            denominator: slots[3],
            rotation: block(4),
            magnetic_rotation: block(13),
        }
    }

    pub fn translation_fractions(&self) -> [Fraction; 3] {
        [0usize, 1, 2].map(|i| rational::reduce(self.translation[i], self.denominator))
    }

    /// The centering as a (non-primed) symmetry operation.
    pub fn as_operation(&self) -> SymmetryOperation {
        SymmetryOperation::new(
            self.rotation,
            self.translation,
            self.denominator,
            TimeReversal::Even,
        )
    }
}

/// Bravais centering letters of the BNS symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Centering {
    Primitive,
    BaseA,
    BaseB,
    BaseC,
    FaceCentered,
    BodyCentered,
    Rhombohedral,
    RhombohedralReverse,
    HexagonalTriple,
}

impl Centering {
    pub const ALL: [Centering; 9] = [
        Centering::Primitive,
        Centering::BaseA,
        Centering::BaseB,
        Centering::BaseC,
        Centering::FaceCentered,
        Centering::BodyCentered,
        Centering::Rhombohedral,
        Centering::RhombohedralReverse,
        Centering::HexagonalTriple,
    ];

    pub fn from_letter(letter: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.letter() == letter)
            .ok_or_else(|| SymmetryError::UnknownCentering(letter.to_string()))
    }

    /// Centering of a BNS symbol such as `Im'm'm`, keyed by its first character.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let first: String = symbol.trim().chars().take(1).collect();
        Self::from_letter(&first)
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Centering::Primitive => "P",
            Centering::BaseA => "A",
            Centering::BaseB => "B",
            Centering::BaseC => "C",
            Centering::FaceCentered => "F",
            Centering::BodyCentered => "I",
            Centering::Rhombohedral => "R",
            Centering::RhombohedralReverse => "Rrev",
            Centering::HexagonalTriple => "H",
        }
    }

    /// Centering translations as `[n1, n2, n3, d]`, the zero vector first.
    pub fn translations(&self) -> &'static [[i64; 4]] {
        match self {
            Centering::Primitive => &[[0, 0, 0, 1]],
            Centering::BaseA => &[[0, 0, 0, 1], [0, 1, 1, 2]],
            Centering::BaseB => &[[0, 0, 0, 1], [1, 0, 1, 2]],
            Centering::BaseC => &[[0, 0, 0, 1], [1, 1, 0, 2]],
            Centering::FaceCentered => &[[0, 0, 0, 1], [0, 1, 1, 2], [1, 0, 1, 2], [1, 1, 0, 2]],
            Centering::BodyCentered => &[[0, 0, 0, 1], [1, 1, 1, 2]],
            Centering::Rhombohedral => &[[0, 0, 0, 1], [2, 1, 1, 3], [1, 2, 2, 3]],
            Centering::RhombohedralReverse => &[[0, 0, 0, 1], [1, 2, 1, 3], [2, 1, 2, 3]],
            Centering::HexagonalTriple => &[[0, 0, 0, 1], [2, 1, 0, 3], [1, 2, 0, 3]],
        }
    }

    pub fn centering_vectors(&self) -> Vec<CenteringVector> {
        self.translations()
            .iter()
            .map(|&[a, b, c, d]| CenteringVector::new([a, b, c], d))
            .collect()
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Centering list for a Bravais letter (`P A B C F I R Rrev H`).
pub fn resolve_centering_for_bravais_letter(letter: &str) -> Result<Vec<CenteringVector>> {
    Centering::from_letter(letter).map(|c| c.centering_vectors())
}

/// Distinct translations modulo one spanned by `vectors`, zero vector first,
/// in discovery order.
pub fn centering_from_lattice_vectors(vectors: &[LatticeVector]) -> Vec<CenteringVector> {
    let steps: Vec<[Fraction; 3]> = vectors
        .iter()
        .map(|v| v.numerators.map(|n| rational::reduce(n, v.denominator)))
        .collect();

    let zero = ([0i64; 3], 1i64);
    let mut found = vec![zero];
    let mut frontier = vec![zero];

    while let Some((numerators, denominator)) = frontier.pop() {
        for step in &steps {
            let components = [0usize, 1, 2].map(|i| rational::add((numerators[i], denominator), step[i]));
            let next = rational::normalize_translation(components);
            if !found.contains(&next) {
                found.push(next);
                frontier.push(next);
            }
        }
    }

    found
        .into_iter()
        .map(|(numerators, denominator)| CenteringVector::new(numerators, denominator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation_set(vectors: &[CenteringVector]) -> Vec<([i64; 3], i64)> {
        let mut set: Vec<_> = vectors
            .iter()
            .map(|v| rational::normalize_translation(v.translation_fractions()))
            .collect();
        set.sort();
        set
    }

    #[test]
    fn test_letter_table() {
        assert_eq!(resolve_centering_for_bravais_letter("P").unwrap().len(), 1);
        let face = resolve_centering_for_bravais_letter("F").unwrap();
        assert_eq!(face.len(), 4);
        assert!(face.contains(&CenteringVector::new([0, 1, 1], 2)));
        assert_eq!(face[0], CenteringVector::zero());
        assert_eq!(
            resolve_centering_for_bravais_letter("Rrev").unwrap()[1],
            CenteringVector::new([1, 2, 1], 3)
        );
        assert_eq!(resolve_centering_for_bravais_letter("H").unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_letter() {
        assert!(matches!(
            resolve_centering_for_bravais_letter("Q"),
            Err(SymmetryError::UnknownCentering(letter)) if letter == "Q"
        ));
        assert!(Centering::from_letter("").is_err());
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Centering::from_symbol("Im'm'm").unwrap(), Centering::BodyCentered);
        assert_eq!(Centering::from_symbol("P_S-1").unwrap(), Centering::Primitive);
        assert_eq!(Centering::from_symbol("Fd-3m'").unwrap(), Centering::FaceCentered);
    }

    #[test]
    fn test_slots_round_trip() {
        let vector = CenteringVector::new([2, 1, 1], 3);
        let slots = vector.to_slots();
        assert_eq!(&slots[..4], &[2, 1, 1, 3]);
        assert_eq!(&slots[4..13], &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(&slots[13..], &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(CenteringVector::from_slots(&slots), vector);
    }

    #[test]
    fn test_as_operation() {
        let op = CenteringVector::new([1, 1, 1], 2).as_operation();
        assert_eq!(op.rotation, Matrix3::identity());
        assert_eq!(op.time_reversal(), TimeReversal::Even);
        assert_eq!(op.translation, Vector3::new(1, 1, 1));
    }

    #[test]
    fn test_lattice_vectors_body_centered() {
        let vectors = vec![
            LatticeVector { numerators: [1, 0, 0], denominator: 1 },
            LatticeVector { numerators: [0, 1, 0], denominator: 1 },
            LatticeVector { numerators: [1, 1, 1], denominator: 2 },
        ];
        let derived = centering_from_lattice_vectors(&vectors);
        assert_eq!(derived, Centering::BodyCentered.centering_vectors());
    }

    #[test]
    fn test_lattice_vectors_agree_with_letters() {
        let cases = [
            (Centering::FaceCentered, vec![[0, 1, 1, 2], [1, 0, 1, 2]]),
            (Centering::Rhombohedral, vec![[2, 1, 1, 3]]),
            (Centering::HexagonalTriple, vec![[2, 1, 0, 3], [0, 0, 1, 1]]),
            (Centering::BaseC, vec![[1, 1, 0, 2], [1, 0, 0, 1]]),
        ];
        for (centering, raw) in cases {
            let vectors: Vec<LatticeVector> = raw
                .iter()
                .map(|&[a, b, c, d]| LatticeVector { numerators: [a, b, c], denominator: d })
                .collect();
            assert_eq!(
                translation_set(&centering_from_lattice_vectors(&vectors)),
                translation_set(&centering.centering_vectors()),
                "centering {} not reproduced from its lattice vectors",
                centering
            );
        }
    }

    #[test]
    fn test_empty_lattice_is_primitive() {
        assert_eq!(centering_from_lattice_vectors(&[]), vec![CenteringVector::zero()]);
    }
}
