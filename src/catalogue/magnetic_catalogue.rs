use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalogue::parser::{parse_catalogue, ParsedCatalogue};
use crate::catalogue::records::MagneticGroupRecord;
use crate::config::CatalogueConfig;
use crate::error::SymmetryError;
use crate::interfaces::{PointOperatorFamily, Setting};
use crate::symmetries::centering::{centering_from_lattice_vectors, CenteringVector};
use crate::symmetries::group_operations::{build_operators, combine_with_centering, is_closed};
use crate::symmetries::point_operators::PointOperatorTable;
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::Result;

static GLOBAL_CATALOGUE: OnceLock<MagneticCatalogue> = OnceLock::new();

/// The tabulated magnetic space groups with both point-operator tables.
#[derive(Debug, Clone)]
pub struct MagneticCatalogue {
    non_hexagonal: PointOperatorTable,
    hexagonal: PointOperatorTable,
    groups: Vec<MagneticGroupRecord>,
}

/// Outcome of the closure check for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureReport {
    pub bns_label: String,
    pub family: PointOperatorFamily,
    pub operator_count: usize,
    pub closed: bool,
    pub error: Option<String>,
}

impl MagneticCatalogue {
    /// Parse catalogue text holding `config.expected_groups` records.
    pub fn parse(text: &str, config: &CatalogueConfig) -> Result<Self> {
        let ParsedCatalogue {
            non_hexagonal,
            hexagonal,
            groups,
        } = parse_catalogue(text, config.expected_groups)?;
        Ok(Self {
            non_hexagonal,
            hexagonal,
            groups,
        })
    }

    /// Read and parse the file at `config.data_path`.
    pub fn load(config: &CatalogueConfig) -> Result<Self> {
        let text = std::fs::read_to_string(&config.data_path).map_err(|source| SymmetryError::Io {
            path: config.data_path.clone(),
            source,
        })?;
        let catalogue = Self::parse(&text, config)?;
        info!(
            "Loaded {} magnetic space groups from {}",
            catalogue.len(),
            config.data_path.display()
        );
        Ok(catalogue)
    }

    /// Process-wide catalogue, loaded from [`CatalogueConfig::from_env`] on first use.
    pub fn global() -> Result<&'static Self> {
        if let Some(catalogue) = GLOBAL_CATALOGUE.get() {
            return Ok(catalogue);
        }
        let catalogue = Self::load(&CatalogueConfig::from_env())?;
        Ok(GLOBAL_CATALOGUE.get_or_init(|| catalogue))
    }

    /// Install an already loaded catalogue as the process-wide one.
    /// Returns the installed catalogue, which is the earlier one if another was set first.
    pub fn install_global(self) -> &'static Self {
        GLOBAL_CATALOGUE.get_or_init(|| self)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MagneticGroupRecord> {
        self.groups.iter()
    }

    pub fn point_operators(&self, family: PointOperatorFamily) -> &PointOperatorTable {
        match family {
            PointOperatorFamily::NonHexagonal => &self.non_hexagonal,
            PointOperatorFamily::Hexagonal => &self.hexagonal,
        }
    }

    /// The single record with BNS number `part_1.part_2`.
    pub fn find_by_bns_label(&self, part_1: u32, part_2: u32) -> Result<&MagneticGroupRecord> {
        let mut matches = self
            .groups
            .iter()
            .filter(|g| g.bns_label.part_1 == part_1 && g.bns_label.part_2 == part_2);
        let first = matches
            .next()
            .ok_or(SymmetryError::GroupNotFound { part_1, part_2 })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(SymmetryError::DuplicateLabel {
                part_1,
                part_2,
                count: extra + 1,
            });
        }
        Ok(first)
    }

    /// Lookup by BNS number text such as `"71.536"`.
    pub fn find_by_bns_number(&self, number: &str) -> Result<&MagneticGroupRecord> {
        let (part_1, part_2) = number
            .trim()
            .split_once('.')
            .and_then(|(a, b)| Some((a.parse().ok()?, b.parse().ok()?)))
            .ok_or_else(|| SymmetryError::InvalidLabel(number.to_string()))?;
        self.find_by_bns_label(part_1, part_2)
    }

    pub fn find_by_og_label(&self, part_1: u32, part_2: u32, part_3: u32) -> Result<&MagneticGroupRecord> {
        self.groups
            .iter()
            .find(|g| {
                g.og_label.part_1 == part_1 && g.og_label.part_2 == part_2 && g.og_label.part_3 == part_3
            })
            .ok_or(SymmetryError::OgGroupNotFound {
                part_1,
                part_2,
                part_3,
            })
    }

    /// Generators of one setting of `record`, built from the requested table.
    pub fn generators(
        &self,
        record: &MagneticGroupRecord,
        setting: Setting,
        family: PointOperatorFamily,
    ) -> Result<Vec<SymmetryOperation>> {
        if family == PointOperatorFamily::NonHexagonal
            && record.point_operator_family() == PointOperatorFamily::Hexagonal
        {
            warn!(
                "Group {} (space group {}) is trigonal/hexagonal but the non-hexagonal point-operator table was requested",
                record.bns_label,
                record.space_group_number()
            );
        }
        let data = record.setting(setting)?;
        build_operators(self.point_operators(family), &data.operators)
    }

    /// Centering translations of one setting: the Bravais letter for BNS,
    /// the tabulated lattice vectors for OG.
    pub fn centering_vectors(
        &self,
        record: &MagneticGroupRecord,
        setting: Setting,
    ) -> Result<Vec<CenteringVector>> {
        match setting {
            Setting::Bns => Ok(record.centering()?.centering_vectors()),
            Setting::Og => Ok(centering_from_lattice_vectors(&record.setting(Setting::Og)?.lattice_vectors)),
        }
    }

    /// Generators and centering vectors of the BNS setting of `part_1.part_2`.
    pub fn operators_with_centering(
        &self,
        part_1: u32,
        part_2: u32,
        family: PointOperatorFamily,
    ) -> Result<(Vec<SymmetryOperation>, Vec<CenteringVector>)> {
        let record = self.find_by_bns_label(part_1, part_2)?;
        let operators = self.generators(record, Setting::Bns, family)?;
        let centerings = self.centering_vectors(record, Setting::Bns)?;
        Ok((operators, centerings))
    }

    /// Complete deduplicated operation set of the BNS setting of `part_1.part_2`.
    pub fn full_operators(
        &self,
        part_1: u32,
        part_2: u32,
        family: PointOperatorFamily,
    ) -> Result<Vec<SymmetryOperation>> {
        let (operators, centerings) = self.operators_with_centering(part_1, part_2, family)?;
        Ok(combine_with_centering(&operators, &centerings))
    }

    pub fn full_operators_for(
        &self,
        record: &MagneticGroupRecord,
        setting: Setting,
        family: PointOperatorFamily,
    ) -> Result<Vec<SymmetryOperation>> {
        let operators = self.generators(record, setting, family)?;
        let centerings = self.centering_vectors(record, setting)?;
        Ok(combine_with_centering(&operators, &centerings))
    }

    /// Complete operation set of the OG setting of a type-4 record.
    pub fn full_og_operators(
        &self,
        record: &MagneticGroupRecord,
        family: PointOperatorFamily,
    ) -> Result<Vec<SymmetryOperation>> {
        self.full_operators_for(record, Setting::Og, family)
    }

    /// Check every group's full BNS operation set for closure, each with the
    /// table suggested by its space-group number.
    pub fn verify_closure(&self) -> Vec<ClosureReport> {
        #[cfg(feature = "parallel")]
        let reports = self.groups.par_iter().map(|g| self.closure_report(g)).collect();
        #[cfg(not(feature = "parallel"))]
        let reports = self.groups.iter().map(|g| self.closure_report(g)).collect();
        reports
    }

    fn closure_report(&self, record: &MagneticGroupRecord) -> ClosureReport {
        let family = record.point_operator_family();
        let (operator_count, closed, error) =
            match self.full_operators_for(record, Setting::Bns, family) {
                Ok(operators) => (operators.len(), is_closed(&operators), None),
                Err(e) => (0, false, Some(e.to_string())),
            };
        ClosureReport {
            bns_label: record.bns_label.text.clone(),
            family,
            operator_count,
            closed,
            error,
        }
    }
}

impl<'a> IntoIterator for &'a MagneticCatalogue {
    type Item = &'a MagneticGroupRecord;
    type IntoIter = std::slice::Iter<'a, MagneticGroupRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
