use log::{debug, warn};
use nalgebra::Matrix3;

use crate::catalogue::reader::{LineCursor, Row};
use crate::catalogue::records::{
    BnsLabel, BnsOgTransform, GroupType, LatticeVector, MagneticGroupRecord, OgLabel,
    OperatorGenerator, SettingData, WyckoffPosition, WyckoffSite,
};
use crate::config::{
    HEXAGONAL_POINT_OPERATORS, LATTICE_VECTOR_FIELDS, NON_HEXAGONAL_POINT_OPERATORS,
    OPERATORS_PER_LINE, OPERATOR_FIELDS,
};
use crate::error::SymmetryError;
use crate::interfaces::{PointOperatorFamily, TimeReversal};
use crate::symmetries::point_operators::{PointOperator, PointOperatorTable};
use crate::Result;

/// Everything read from one catalogue text.
#[derive(Debug, Clone)]
pub struct ParsedCatalogue {
    pub non_hexagonal: PointOperatorTable,
    pub hexagonal: PointOperatorTable,
    pub groups: Vec<MagneticGroupRecord>,
}

/// Parse both point-operator tables followed by `expected_groups` records.
pub fn parse_catalogue(text: &str, expected_groups: usize) -> Result<ParsedCatalogue> {
    let mut cursor = LineCursor::new(text);

    let non_hexagonal = parse_point_operators(
        &mut cursor,
        PointOperatorFamily::NonHexagonal,
        NON_HEXAGONAL_POINT_OPERATORS,
    )?;
    let hexagonal = parse_point_operators(
        &mut cursor,
        PointOperatorFamily::Hexagonal,
        HEXAGONAL_POINT_OPERATORS,
    )?;
    debug!(
        "Read {} non-hexagonal and {} hexagonal point operators",
        non_hexagonal.len(),
        hexagonal.len()
    );

    let mut groups = Vec::with_capacity(expected_groups);
    for index in 0..expected_groups {
        cursor.set_record(format!("group #{}", index + 1));
        groups.push(parse_group(&mut cursor)?);
    }
    debug!("Read {} magnetic space groups", groups.len());

    let trailing = cursor.remaining_non_blank();
    if trailing > 0 {
        warn!(
            "Ignoring {} non-blank lines after the last of {} magnetic space groups (from line {})",
            trailing,
            expected_groups,
            cursor.line_number()
        );
    }

    Ok(ParsedCatalogue {
        non_hexagonal,
        hexagonal,
        groups,
    })
}

fn parse_point_operators(
    cursor: &mut LineCursor,
    family: PointOperatorFamily,
    count: usize,
) -> Result<PointOperatorTable> {
    cursor.set_record(format!("{} point operators", family));
    let mut operators = Vec::with_capacity(count);
    for expected in 1..=count {
        let mut row = cursor.next_row("point operator")?;
        let found: i64 = row.int("number")?;
        if found != expected as i64 {
            return Err(SymmetryError::PointOperatorNumbering {
                table: family,
                line: row.line(),
                expected,
                found,
            });
        }
        let label = row.text("label")?;
        let xyz = row.text("xyz")?;
        let matrix = read_matrix_row_major(&mut row, "matrix")?;
        operators.push(PointOperator {
            index: expected,
            label,
            xyz,
            matrix,
        });
    }
    Ok(PointOperatorTable::new(family, operators))
}

fn parse_group(cursor: &mut LineCursor) -> Result<MagneticGroupRecord> {
    let mut row = cursor.next_row("labels")?;
    let bns_part_1: u32 = row.int("bns_part_1")?;
    let bns_part_2: u32 = row.int("bns_part_2")?;
    let bns_text = row.text("bns_label")?;
    let bns_symbol = row.text("bns_symbol")?;
    let og_part_1: u32 = row.int("og_part_1")?;
    let og_part_2: u32 = row.int("og_part_2")?;
    let og_part_3: u32 = row.int("og_part_3")?;
    let og_text = row.text("og_label")?;
    let og_symbol = row.text("og_symbol")?;
    cursor.set_record(format!("BNS {}", bns_text));

    let mut row = cursor.next_row("group_type")?;
    let code: i64 = row.int("group_type")?;
    let group_type = GroupType::from_code(code)
        .ok_or_else(|| row.error("group_type", format!("expected 1 to 4, found {}", code)))?;

    let bns_og_transform = match group_type {
        GroupType::Type4 => Some(parse_bns_og_transform(cursor)?),
        _ => None,
    };

    let bns = parse_setting(cursor)?;
    let og = match group_type {
        GroupType::Type4 => {
            cursor.set_record(format!("OG {} (BNS {})", og_text, bns_text));
            Some(parse_setting(cursor)?)
        }
        _ => None,
    };

    Ok(MagneticGroupRecord {
        bns_label: BnsLabel {
            part_1: bns_part_1,
            part_2: bns_part_2,
            text: bns_text,
        },
        bns_symbol,
        og_label: OgLabel {
            part_1: og_part_1,
            part_2: og_part_2,
            part_3: og_part_3,
            text: og_text,
        },
        og_symbol,
        group_type,
        bns,
        bns_og_transform,
        og,
    })
}

fn parse_bns_og_transform(cursor: &mut LineCursor) -> Result<BnsOgTransform> {
    let mut row = cursor.next_row("bns_og_transform")?;
    let point_operator = read_matrix_column_major(&mut row, "bns_og_point_op")?;
    let origin = row.ints::<3>("bns_og_origin")?;
    let origin_denominator: i64 = row.int("bns_og_origin_denominator")?;
    if origin_denominator == 0 {
        return Err(row.error("bns_og_origin_denominator", "zero denominator"));
    }
    Ok(BnsOgTransform {
        point_operator,
        origin,
        origin_denominator,
    })
}

fn parse_setting(cursor: &mut LineCursor) -> Result<SettingData> {
    let operators = parse_operators(cursor)?;
    let lattice_vectors = parse_lattice_vectors(cursor)?;
    let wyckoff_sites = parse_wyckoff_sites(cursor)?;
    Ok(SettingData {
        operators,
        lattice_vectors,
        wyckoff_sites,
    })
}

fn parse_operators(cursor: &mut LineCursor) -> Result<Vec<OperatorGenerator>> {
    let count: usize = cursor.next_row("ops_count")?.int("ops_count")?;
    let mut operators = Vec::with_capacity(count);
    while operators.len() < count {
        let mut row = cursor.next_row("operators")?;
        let on_line = (count - operators.len()).min(OPERATORS_PER_LINE);
        for _ in 0..on_line {
            operators.push(read_operator(&mut row)?);
        }
    }
    Ok(operators)
}

fn read_operator(row: &mut Row) -> Result<OperatorGenerator> {
    let fields = row.ints::<OPERATOR_FIELDS>("operator")?;
    let [point_operator, t1, t2, t3, denominator, time_reversal] = fields;
    let point_operator = usize::try_from(point_operator)
        .ok()
        .filter(|&index| index >= 1)
        .ok_or_else(|| row.error("point_op", format!("invalid index {}", point_operator)))?;
    if denominator == 0 {
        return Err(row.error("denominator", "zero denominator"));
    }
    let time_reversal = TimeReversal::from_sign(time_reversal)
        .ok_or_else(|| row.error("time_reversal", format!("expected +1 or -1, found {}", time_reversal)))?;
    Ok(OperatorGenerator {
        point_operator,
        translation: [t1, t2, t3],
        denominator,
        time_reversal,
    })
}

fn parse_lattice_vectors(cursor: &mut LineCursor) -> Result<Vec<LatticeVector>> {
    let count: usize = cursor.next_row("lattice_count")?.int("lattice_count")?;
    // the vector line is present even when the count is zero
    let mut row = cursor.next_row("lattice_vectors")?;
    let mut vectors = Vec::with_capacity(count);
    for _ in 0..count {
        let [n1, n2, n3, denominator] = row.ints::<LATTICE_VECTOR_FIELDS>("lattice_vector")?;
        if denominator == 0 {
            return Err(row.error("lattice_vector", "zero denominator"));
        }
        vectors.push(LatticeVector {
            numerators: [n1, n2, n3],
            denominator,
        });
    }
    Ok(vectors)
}

fn parse_wyckoff_sites(cursor: &mut LineCursor) -> Result<Vec<WyckoffSite>> {
    let count: usize = cursor.next_row("wyckoff_count")?.int("wyckoff_count")?;
    let mut sites = Vec::with_capacity(count);
    for _ in 0..count {
        let mut row = cursor.next_row("wyckoff_site")?;
        let position_count: usize = row.int("wyckoff_pos_count")?;
        let multiplicity: usize = row.int("wyckoff_mult")?;
        let label = row.text("wyckoff_label")?;

        let mut positions = Vec::with_capacity(position_count);
        for _ in 0..position_count {
            let mut row = cursor.next_row("wyckoff_position")?;
            positions.push(read_wyckoff_position(&mut row)?);
        }
        sites.push(WyckoffSite {
            multiplicity,
            label,
            positions,
        });
    }
    Ok(sites)
}

fn read_wyckoff_position(row: &mut Row) -> Result<WyckoffPosition> {
    let offset = row.ints::<3>("wyckoff_offset")?;
    let denominator: i64 = row.int("wyckoff_denominator")?;
    if denominator == 0 {
        return Err(row.error("wyckoff_denominator", "zero denominator"));
    }
    let xyz = read_matrix_column_major(row, "wyckoff_xyz")?;
    let moment = read_matrix_column_major(row, "wyckoff_moment")?;
    Ok(WyckoffPosition {
        offset,
        denominator,
        xyz,
        moment,
    })
}

fn read_matrix_entries(row: &mut Row, field: &str) -> Result<[i32; 9]> {
    let mut entries = [0i32; 9];
    for entry in entries.iter_mut() {
        *entry = row.int(field)?;
    }
    Ok(entries)
}

fn read_matrix_row_major(row: &mut Row, field: &str) -> Result<Matrix3<i32>> {
    read_matrix_entries(row, field).map(|entries| Matrix3::from_row_slice(&entries))
}

/// Stored column by column; the transpose of the row-major reading.
fn read_matrix_column_major(row: &mut Row, field: &str) -> Result<Matrix3<i32>> {
    read_matrix_entries(row, field).map(|entries| Matrix3::from_column_slice(&entries))
}
