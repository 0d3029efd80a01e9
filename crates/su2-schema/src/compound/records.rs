//! Fixed-width boundary records
//!
//! Inlet and periodic boundary options are flat token lists made of repeated
//! records, each a run of marker names followed by a fixed number of floats.

use super::{number, CompoundValue};
use crate::error::CompoundError;
use crate::value::format_float;

const INLET_TAG: &str = "INLET";
const PERIODIC_TAG: &str = "PERIODIC";

/// Split tokens into records of `width`, rejecting a ragged tail
fn records<'a>(
    tag: &'static str,
    width: usize,
    tokens: &'a [String],
) -> Result<std::slice::ChunksExact<'a, String>, CompoundError> {
    if tokens.len() % width != 0 {
        return Err(CompoundError::RecordWidth {
            tag,
            width,
            found: tokens.len(),
        });
    }
    Ok(tokens.chunks_exact(width))
}

fn triple(tag: &'static str, tokens: &[String]) -> Result<[f64; 3], CompoundError> {
    Ok([
        number(tag, &tokens[0])?,
        number(tag, &tokens[1])?,
        number(tag, &tokens[2])?,
    ])
}

fn render_records(rows: impl Iterator<Item = Vec<String>>) -> String {
    let parts: Vec<String> = rows.map(|row| row.join(", ")).collect();
    format!("( {} )", parts.join(", "))
}

/// One inlet boundary condition
#[derive(Debug, Clone, PartialEq)]
pub struct InletRecord {
    /// Boundary marker name
    pub marker: String,
    /// Total temperature
    pub total_temperature: f64,
    /// Total pressure
    pub total_pressure: f64,
    /// Flow direction unit vector
    pub direction: [f64; 3],
}

/// Inlet boundary list: `( marker, T0, P0, nx, ny, nz, ... )`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InletList {
    records: Vec<InletRecord>,
}

impl InletList {
    /// Tokens per record
    pub const WIDTH: usize = 6;

    /// Create from records
    #[must_use]
    pub fn new(records: Vec<InletRecord>) -> Self {
        Self { records }
    }

    /// Records in order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[InletRecord] {
        &self.records
    }

    /// Record for a boundary marker
    #[must_use]
    pub fn marker(&self, name: &str) -> Option<&InletRecord> {
        self.records.iter().find(|record| record.marker == name)
    }
}

impl CompoundValue for InletList {
    fn is_zero(&self) -> bool {
        self.records.is_empty()
    }

    fn render_tokens(&self) -> String {
        render_records(self.records.iter().map(|record| {
            let mut row = vec![
                record.marker.clone(),
                format_float(record.total_temperature),
                format_float(record.total_pressure),
            ];
            row.extend(record.direction.iter().copied().map(format_float));
            row
        }))
    }

    fn parse_tokens(tokens: &[String]) -> Result<Self, CompoundError> {
        let records = records(INLET_TAG, Self::WIDTH, tokens)?
            .map(|chunk| {
                Ok(InletRecord {
                    marker: chunk[0].clone(),
                    total_temperature: number(INLET_TAG, &chunk[1])?,
                    total_pressure: number(INLET_TAG, &chunk[2])?,
                    direction: triple(INLET_TAG, &chunk[3..6])?,
                })
            })
            .collect::<Result<Vec<_>, CompoundError>>()?;
        Ok(Self { records })
    }
}

/// One periodic boundary pair
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicRecord {
    /// Periodic boundary marker
    pub marker: String,
    /// Donor boundary marker
    pub donor: String,
    /// Rotation center
    pub center: [f64; 3],
    /// Rotation angles in degrees
    pub angles: [f64; 3],
    /// Translation vector
    pub translation: [f64; 3],
}

/// Periodic boundary list: `( marker, donor, cx, cy, cz, ax, ay, az, tx, ty, tz, ... )`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodicList {
    records: Vec<PeriodicRecord>,
}

impl PeriodicList {
    /// Tokens per record
    pub const WIDTH: usize = 11;

    /// Create from records
    #[must_use]
    pub fn new(records: Vec<PeriodicRecord>) -> Self {
        Self { records }
    }

    /// Records in order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PeriodicRecord] {
        &self.records
    }
}

impl CompoundValue for PeriodicList {
    fn is_zero(&self) -> bool {
        self.records.is_empty()
    }

    fn render_tokens(&self) -> String {
        render_records(self.records.iter().map(|record| {
            let mut row = vec![record.marker.clone(), record.donor.clone()];
            row.extend(
                record
                    .center
                    .iter()
                    .chain(&record.angles)
                    .chain(&record.translation)
                    .copied()
                    .map(format_float),
            );
            row
        }))
    }

    fn parse_tokens(tokens: &[String]) -> Result<Self, CompoundError> {
        let records = records(PERIODIC_TAG, Self::WIDTH, tokens)?
            .map(|chunk| {
                Ok(PeriodicRecord {
                    marker: chunk[0].clone(),
                    donor: chunk[1].clone(),
                    center: triple(PERIODIC_TAG, &chunk[2..5])?,
                    angles: triple(PERIODIC_TAG, &chunk[5..8])?,
                    translation: triple(PERIODIC_TAG, &chunk[8..11])?,
                })
            })
            .collect::<Result<Vec<_>, CompoundError>>()?;
        Ok(Self { records })
    }
}
