//! Orbits of fractional coordinates and magnetic moments under a set of operations.
//!
//! Results are indexed `[operation][point]`. Coordinates are wrapped into the unit
//! cell; moments are rotated with the plain rotation block only.

use nalgebra::Vector3;

use crate::symmetries::symmetry_operations::SymmetryOperation;

pub use crate::config::{DEFAULT_ROUNDING_DECIMALS, MAX_ROUNDING_DECIMALS};

/// `R·p + t/d` for every operation and point, each coordinate wrapped into `[0, 1)`.
pub fn apply_to_fractional(
    operations: &[SymmetryOperation],
    points: &[Vector3<f64>],
) -> Vec<Vec<Vector3<f64>>> {
    operations
        .iter()
        .map(|op| {
            points
                .iter()
                .map(|&p| op.apply(p).map(wrap_coordinate))
                .collect()
        })
        .collect()
}

/// `R·m` for every operation and moment; no translation, no time-reversal or determinant factor.
pub fn apply_to_moment(
    operations: &[SymmetryOperation],
    moments: &[Vector3<f64>],
) -> Vec<Vec<Vector3<f64>>> {
    operations
        .iter()
        .map(|op| moments.iter().map(|&m| op.apply_moment(m)).collect())
        .collect()
}

/// Number of distinct positions generated from `point`, compared after rounding
/// to `decimals` places modulo one. `decimals` is capped at [`MAX_ROUNDING_DECIMALS`].
pub fn multiplicity(operations: &[SymmetryOperation], point: Vector3<f64>, decimals: u32) -> usize {
    unique_orbit(operations, point, decimals).len()
}

pub fn multiplicities(
    operations: &[SymmetryOperation],
    points: &[Vector3<f64>],
    decimals: u32,
) -> Vec<usize> {
    points
        .iter()
        .map(|&p| multiplicity(operations, p, decimals))
        .collect()
}

/// Distinct images of `point`, wrapped into the unit cell, in operation order.
pub fn unique_orbit(
    operations: &[SymmetryOperation],
    point: Vector3<f64>,
    decimals: u32,
) -> Vec<Vector3<f64>> {
    let scale = rounding_scale(decimals);
    let mut keys: Vec<[i64; 3]> = Vec::with_capacity(operations.len());
    let mut orbit = Vec::with_capacity(operations.len());

    for op in operations {
        let image = op.apply(point).map(wrap_coordinate);
        let key = orbit_key(&image, scale);
        if !keys.contains(&key) {
            keys.push(key);
            orbit.push(image);
        }
    }
    orbit
}

fn wrap_coordinate(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

fn rounding_scale(decimals: u32) -> i64 {
    10_i64.pow(decimals.min(MAX_ROUNDING_DECIMALS))
}

/// Integer key of a position rounded to `1/scale`, taken modulo one cell.
fn orbit_key(position: &Vector3<f64>, scale: i64) -> [i64; 3] {
    [0usize, 1, 2].map(|i| ((position[i] * scale as f64).round() as i64).rem_euclid(scale))
}
