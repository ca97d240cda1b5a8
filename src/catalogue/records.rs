use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SymmetryError;
use crate::interfaces::{PointOperatorFamily, Setting, TimeReversal};
use crate::symmetries::centering::Centering;
use crate::Result;

/// BNS number, e.g. `71.536`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BnsLabel {
    /// Space-group number of the family group
    pub part_1: u32,
    pub part_2: u32,
    pub text: String,
}

impl fmt::Display for BnsLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// OG number, e.g. `71.4.539`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OgLabel {
    pub part_1: u32,
    pub part_2: u32,
    pub part_3: u32,
    pub text: String,
}

impl fmt::Display for OgLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Magnetic space-group types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupType {
    /// Colourless groups: no primed operations
    Type1,
    /// Grey groups: contain pure time reversal `1'`
    Type2,
    /// Black-white groups with primed point operations
    Type3,
    /// Black-white groups with an anti-translation
    Type4,
}

impl GroupType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Type1),
            2 => Some(Self::Type2),
            3 => Some(Self::Type3),
            4 => Some(Self::Type4),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Type1 => 1,
            Self::Type2 => 2,
            Self::Type3 => 3,
            Self::Type4 => 4,
        }
    }
}

/// One tabulated generator: point-operator index, translation, time reversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorGenerator {
    /// 1-based index into the selected point-operator table
    pub point_operator: usize,
    pub translation: [i64; 3],
    pub denominator: i64,
    pub time_reversal: TimeReversal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeVector {
    pub numerators: [i64; 3],
    pub denominator: i64,
}

impl LatticeVector {
    pub fn to_f64(&self) -> Vector3<f64> {
        Vector3::from(self.numerators.map(|n| n as f64 / self.denominator as f64))
    }
}

/// A representative position of a Wyckoff site with its moment constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WyckoffPosition {
    pub offset: [i64; 3],
    pub denominator: i64,
    /// Coefficients of the free parameters `(x, y, z)`
    pub xyz: Matrix3<i32>,
    /// Coefficients of the free moment components `(mx, my, mz)`
    pub moment: Matrix3<i32>,
}

impl WyckoffPosition {
    /// Fractional coordinates for the free parameters `free = (x, y, z)`.
    pub fn coordinates(&self, free: Vector3<f64>) -> Vector3<f64> {
        let offset = Vector3::from(self.offset.map(|n| n as f64 / self.denominator as f64));
        offset + self.xyz.map(|v| v as f64) * free
    }

    /// Allowed moment for the free components `free = (mx, my, mz)`.
    pub fn moment(&self, free: Vector3<f64>) -> Vector3<f64> {
        self.moment.map(|v| v as f64) * free
    }

    /// True when the site forbids any magnetic moment.
    pub fn is_nonmagnetic(&self) -> bool {
        self.moment == Matrix3::zeros()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WyckoffSite {
    pub multiplicity: usize,
    pub label: String,
    pub positions: Vec<WyckoffPosition>,
}

/// Generators, lattice vectors and Wyckoff sites of one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingData {
    pub operators: Vec<OperatorGenerator>,
    pub lattice_vectors: Vec<LatticeVector>,
    pub wyckoff_sites: Vec<WyckoffSite>,
}

impl SettingData {
    /// Multiplicity of the general position (largest tabulated site).
    pub fn general_multiplicity(&self) -> Option<usize> {
        self.wyckoff_sites.iter().map(|site| site.multiplicity).max()
    }

    pub fn wyckoff_site(&self, label: &str) -> Option<&WyckoffSite> {
        self.wyckoff_sites.iter().find(|site| site.label == label)
    }
}

/// Change of setting from BNS to OG for type-4 groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BnsOgTransform {
    pub point_operator: Matrix3<i32>,
    pub origin: [i64; 3],
    pub origin_denominator: i64,
}

/// One catalogue entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagneticGroupRecord {
    pub bns_label: BnsLabel,
    pub bns_symbol: String,
    pub og_label: OgLabel,
    pub og_symbol: String,
    pub group_type: GroupType,
    pub bns: SettingData,
    pub bns_og_transform: Option<BnsOgTransform>,
    pub og: Option<SettingData>,
}

impl MagneticGroupRecord {
    pub fn space_group_number(&self) -> u32 {
        self.bns_label.part_1
    }

    /// Table the operator indices of this group are meant for.
    pub fn point_operator_family(&self) -> PointOperatorFamily {
        PointOperatorFamily::for_space_group(self.space_group_number())
    }

    pub fn centering(&self) -> Result<Centering> {
        Centering::from_symbol(&self.bns_symbol)
    }

    pub fn setting(&self, setting: Setting) -> Result<&SettingData> {
        match setting {
            Setting::Bns => Ok(&self.bns),
            Setting::Og => self.og.as_ref().ok_or_else(|| SymmetryError::MissingSetting {
                label: self.bns_label.text.clone(),
                setting,
            }),
        }
    }

    pub fn is_type_4(&self) -> bool {
        self.group_type == GroupType::Type4
    }
}
