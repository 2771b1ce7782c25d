use log::info;
use serde_derive::Serialize;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use super::{
    extrema, signal, threshold_regions, Extrema, ThresholdInterval, WindowResult, WindowScanner,
};
use crate::tm::FormulaKind;
use crate::{Base, Result, TmError};

/// Statistics derived from the signal of a single formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaSummary {
    pub formula: FormulaKind,
    /// `None` if the scan produced no windows.
    pub extrema: Option<Extrema>,
    pub regions: Vec<ThresholdInterval>,
}

/// Everything a presentation layer needs to draw the melting temperature profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub sequence_length: usize,
    pub window_size: usize,
    pub threshold: f64,
    pub results: Vec<WindowResult>,
    pub summaries: Vec<FormulaSummary>,
}

impl ScanReport {
    pub fn new(scanner: &WindowScanner, sequence: &[Base], threshold: f64) -> Result<ScanReport> {
        let results = scanner.scan(sequence);
        let mut summaries = Vec::with_capacity(scanner.formulas().len());
        for formula in scanner.formulas() {
            let series = signal(&results, formula.kind());
            let extrema = match extrema(&series) {
                Ok(ext) => Some(ext),
                Err(TmError::EmptyInput) => None,
                Err(err) => return Err(err),
            };
            let regions = threshold_regions(&series, threshold);
            info!(
                "{} formula: {} region(s) at or above {}",
                formula.kind(),
                regions.len(),
                threshold
            );
            summaries.push(FormulaSummary {
                formula: formula.kind(),
                extrema,
                regions,
            });
        }
        Ok(ScanReport {
            sequence_length: sequence.len(),
            window_size: scanner.window_size(),
            threshold,
            results,
            summaries,
        })
    }

    pub fn summary(&self, kind: FormulaKind) -> Option<&FormulaSummary> {
        self.summaries.iter().find(|s| s.formula == kind)
    }

    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string(self)?.as_bytes())?;
        Ok(())
    }
}
