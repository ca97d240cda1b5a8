//! `x,y,z`-style text for symmetry operations and its inverse parser.
//!
//! ```text
//! x-y+1/2,-y,-z,+1
//! -x,-y,z,mx,my,-mz,-1
//! ```
//!
//! Rows list the non-zero rotation coefficients (`±x`, `±2y`, ...) followed by the
//! reduced translation, with a leading `+` dropped. The last field is the
//! time-reversal sign.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::interfaces::TimeReversal;
use crate::rational::{self, Fraction};
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::Result;

/// Axis and moment labels used when writing or reading operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationLabels {
    pub axes: [String; 3],
    pub moments: [String; 3],
}

impl Default for NotationLabels {
    fn default() -> Self {
        Self::new(["x", "y", "z"], ["mx", "my", "mz"])
    }
}

impl NotationLabels {
    pub fn new(axes: [&str; 3], moments: [&str; 3]) -> Self {
        Self {
            axes: axes.map(str::to_string),
            moments: moments.map(str::to_string),
        }
    }
}

/// Three coordinate rows and the time-reversal sign.
pub fn to_text(operation: &SymmetryOperation, labels: &NotationLabels) -> String {
    let translation = operation.translation_fractions();
    let mut fields: Vec<String> = (0..3)
        .map(|row| format_row(row_of(&operation.rotation, row), &labels.axes, translation[row]))
        .collect();
    fields.push(operation.time_reversal().to_string());
    fields.join(",")
}

/// Coordinate rows, moment rows from the time-reversal-scaled block, then the sign.
pub fn to_text_with_moments(operation: &SymmetryOperation, labels: &NotationLabels) -> String {
    let translation = operation.translation_fractions();
    let mut fields: Vec<String> = (0..3)
        .map(|row| format_row(row_of(&operation.rotation, row), &labels.axes, translation[row]))
        .collect();
    fields.extend(
        (0..3).map(|row| format_row(row_of(&operation.magnetic_rotation, row), &labels.moments, (0, 1))),
    );
    fields.push(operation.time_reversal().to_string());
    fields.join(",")
}

fn row_of(matrix: &Matrix3<i32>, row: usize) -> [i32; 3] {
    [matrix[(row, 0)], matrix[(row, 1)], matrix[(row, 2)]]
}

fn format_row(coefficients: [i32; 3], labels: &[String; 3], translation: Fraction) -> String {
    let mut text = String::new();
    for (coefficient, label) in coefficients.iter().zip(labels) {
        match *coefficient {
            0 => {}
            1 => text.push_str(&format!("+{}", label)),
            -1 => text.push_str(&format!("-{}", label)),
            c => text.push_str(&format!("{:+}{}", c, label)),
        }
    }

    let (numerator, denominator) = rational::reduce(translation.0, translation.1);
    if numerator != 0 {
        if denominator == 1 {
            text.push_str(&format!("{:+}", numerator));
        } else {
            text.push_str(&format!("{:+}/{}", numerator, denominator));
        }
    }

    match text.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None if text.is_empty() => "0".to_string(),
        None => text,
    }
}

/// Parse 3, 4, 6 or 7 comma-separated fields back into an operation.
///
/// Without moment rows the magnetic block is the rotation times the sign
/// (default `+1`); with moment rows it is read as written.
pub fn parse_operation(text: &str, labels: &NotationLabels) -> Result<SymmetryOperation> {
    let notation_error = |message: String| SymmetryError::Notation {
        text: text.to_string(),
        message,
    };

    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let (coordinate_fields, moment_fields, sign_field) = match fields.len() {
        3 => (&fields[..3], None, None),
        4 => (&fields[..3], None, Some(fields[3])),
        6 => (&fields[..3], Some(&fields[3..6]), None),
        7 => (&fields[..3], Some(&fields[3..6]), Some(fields[6])),
        n => return Err(notation_error(format!("expected 3, 4, 6 or 7 fields, found {}", n))),
    };

    let time_reversal = match sign_field {
        None => TimeReversal::Even,
        Some(sign) => parse_sign(sign).map_err(&notation_error)?,
    };

    let mut rotation = Matrix3::<i32>::zeros();
    let mut translation = [(0i64, 1i64); 3];
    for (row, field) in coordinate_fields.iter().enumerate() {
        let (coefficients, offset) = parse_row(field, &labels.axes).map_err(&notation_error)?;
        for (col, c) in coefficients.iter().enumerate() {
            rotation[(row, col)] = *c;
        }
        translation[row] = offset;
    }

    let (numerators, denominator) = rational::common_denominator(&translation);
    let mut operation = SymmetryOperation::new(
        rotation,
        Vector3::new(numerators[0], numerators[1], numerators[2]),
        denominator,
        time_reversal,
    );

    if let Some(moment_fields) = moment_fields {
        for (row, field) in moment_fields.iter().enumerate() {
            let (coefficients, offset) = parse_row(field, &labels.moments).map_err(&notation_error)?;
            if offset.0 != 0 {
                return Err(notation_error(format!("moment row `{}` carries a translation", field)));
            }
            for (col, c) in coefficients.iter().enumerate() {
                operation.magnetic_rotation[(row, col)] = *c;
            }
        }
    }

    Ok(operation)
}

fn parse_sign(field: &str) -> std::result::Result<TimeReversal, String> {
    match field {
        "1" | "+1" => Ok(TimeReversal::Even),
        "-1" => Ok(TimeReversal::Odd),
        other => Err(format!("time reversal must be +1 or -1, found `{}`", other)),
    }
}

fn parse_row(expression: &str, labels: &[String; 3]) -> std::result::Result<([i32; 3], Fraction), String> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err("empty row".to_string());
    }

    let mut coefficients = [0i32; 3];
    let mut translation: Fraction = (0, 1);
    for term in split_terms(&compact) {
        let (sign, body) = match term.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, term.strip_prefix('+').unwrap_or(term)),
        };
        if body.is_empty() {
            return Err(format!("dangling sign in `{}`", expression));
        }
        match match_label(body, labels)? {
            Some((axis, factor)) => coefficients[axis] += sign * factor,
            None => {
                let (n, d) = parse_fraction(body)?;
                translation = rational::add(translation, (sign as i64 * n, d));
            }
        }
    }
    Ok((coefficients, translation))
}

/// Split `x-y+1/2` into `x`, `-y`, `+1/2`.
fn split_terms(expression: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    for (i, c) in expression.char_indices() {
        if i > start && (c == '+' || c == '-') {
            terms.push(&expression[start..i]);
            start = i;
        }
    }
    terms.push(&expression[start..]);
    terms
}

/// Axis index and integer factor of a term ending in one of `labels`.
fn match_label(body: &str, labels: &[String; 3]) -> std::result::Result<Option<(usize, i32)>, String> {
    let mut order: Vec<usize> = (0..3).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(labels[i].len()));

    for axis in order {
        let Some(prefix) = body.strip_suffix(labels[axis].as_str()) else {
            continue;
        };
        let prefix = prefix.strip_suffix('*').unwrap_or(prefix);
        if prefix.is_empty() {
            return Ok(Some((axis, 1)));
        }
        return prefix
            .parse::<i32>()
            .map(|factor| Some((axis, factor)))
            .map_err(|_| format!("invalid coefficient `{}`", prefix));
    }
    Ok(None)
}

fn parse_fraction(body: &str) -> std::result::Result<Fraction, String> {
    let invalid = || format!("invalid term `{}`", body);
    let (numerator, denominator) = match body.split_once('/') {
        Some((n, d)) => (n, d),
        None => (body, "1"),
    };
    let numerator: i64 = numerator.parse().map_err(|_| invalid())?;
    let denominator: i64 = denominator.parse().map_err(|_| invalid())?;
    if denominator == 0 {
        return Err(format!("zero denominator in `{}`", body));
    }
    Ok(rational::reduce(numerator, denominator))
}
