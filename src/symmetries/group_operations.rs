use crate::catalogue::records::OperatorGenerator;
use crate::rational;
use crate::symmetries::centering::CenteringVector;
use crate::symmetries::point_operators::PointOperatorTable;
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::Result;
use nalgebra::Vector3;

/// Build one operation per tabulated generator, in generator order.
pub fn build_operators(
    table: &PointOperatorTable,
    generators: &[OperatorGenerator],
) -> Result<Vec<SymmetryOperation>> {
    generators
        .iter()
        .map(|generator| SymmetryOperation::from_generator(table, generator))
        .collect()
}

/// Every (operation, centering) product, normalized and deduplicated.
/// The result is ordered by operation, then by centering.
pub fn combine_with_centering(
    operations: &[SymmetryOperation],
    centerings: &[CenteringVector],
) -> Vec<SymmetryOperation> {
    let mut combined = Vec::with_capacity(operations.len() * centerings.len());
    for operation in operations {
        for centering in centerings {
            combined.push(apply_centering(operation, centering));
        }
    }
    deduplicate(&combined)
}

fn apply_centering(operation: &SymmetryOperation, centering: &CenteringVector) -> SymmetryOperation {
    let rotated = centering.rotation.map(|v| v as i64) * operation.translation;
    let components = [0usize, 1, 2].map(|i| {
        rational::sum_fractions(&[
            (rotated[i], operation.denominator),
            (centering.translation[i], centering.denominator),
        ])
    });
    let (numerators, denominator) = rational::normalize_translation(components);
    SymmetryOperation {
        translation: Vector3::from(numerators),
        denominator,
        rotation: centering.rotation * operation.rotation,
        magnetic_rotation: centering.magnetic_rotation * operation.magnetic_rotation,
    }
}

/// Normalized operations with repeats removed; the first occurrence wins.
pub fn deduplicate(operations: &[SymmetryOperation]) -> Vec<SymmetryOperation> {
    let mut unique: Vec<SymmetryOperation> = Vec::with_capacity(operations.len());
    for operation in operations {
        let normalized = operation.normalized();
        if !unique.contains(&normalized) {
            unique.push(normalized);
        }
    }
    unique
}

/// Position of an operation equivalent to `operation` modulo lattice translations.
pub fn find_equivalent(operations: &[SymmetryOperation], operation: &SymmetryOperation) -> Option<usize> {
    let target = operation.normalized();
    operations.iter().position(|candidate| candidate.normalized() == target)
}

/// True when every pairwise product is again in the set (modulo lattice translations).
pub fn is_closed(operations: &[SymmetryOperation]) -> bool {
    let normalized = deduplicate(operations);
    normalized.iter().all(|a| {
        normalized
            .iter()
            .all(|b| normalized.contains(&a.compose(b)))
    })
}
