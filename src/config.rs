//! Parameters of a scan, loadable from a JSON file.
use serde_derive::{Deserialize, Serialize};

use std::fs::File;
use std::path::Path;

use super::analysis::{WindowScanner, DEFAULT_WINDOW_SIZE};
use super::tm::{Concentration, FormulaKind, TmFormula, DEFAULT_NA_CONCENTRATION};
use super::Result;

pub const DEFAULT_THRESHOLD: f64 = 40.;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    pub window_size: usize,
    /// Na+ concentration in mol/l, only used by the salt adjusted formula.
    pub na_concentration: f64,
    /// Tm in °C from which on a window counts as part of a region.
    pub threshold: f64,
    pub formulas: Vec<FormulaKind>,
}

impl Default for ScanParams {
    fn default() -> Self {
        ScanParams {
            window_size: DEFAULT_WINDOW_SIZE,
            na_concentration: DEFAULT_NA_CONCENTRATION,
            threshold: DEFAULT_THRESHOLD,
            formulas: vec![FormulaKind::Basic, FormulaKind::SaltAdjusted],
        }
    }
}

impl ScanParams {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Builds the formulas, validating the concentration if the salt adjusted
    /// formula is requested. Duplicates are left to the scanner.
    pub fn tm_formulas(&self) -> Result<Vec<TmFormula>> {
        self.formulas
            .iter()
            .map(|kind| match kind {
                FormulaKind::Basic => Ok(TmFormula::Basic),
                FormulaKind::SaltAdjusted => {
                    Ok(TmFormula::SaltAdjusted(Concentration::molar(self.na_concentration)?))
                }
            })
            .collect()
    }

    pub fn scanner(&self) -> Result<WindowScanner> {
        WindowScanner::new(self.window_size, self.tm_formulas()?)
    }
}
