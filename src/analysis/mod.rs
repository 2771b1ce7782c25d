use log::{debug, warn};
use serde_derive::Serialize;

use super::tm::{BaseCounts, FormulaKind, TmFormula};
use super::{Base, Result, TmError};

pub mod regions;
pub mod report;
pub mod stats;

pub use self::regions::{region_track, threshold_regions, ThresholdInterval};
pub use self::report::ScanReport;
pub use self::stats::{extrema, Extrema};

pub const DEFAULT_WINDOW_SIZE: usize = 9;

/// Melting temperatures of the window starting at `position`. A value is only
/// present if the corresponding formula was requested from the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowResult {
    pub position: usize,
    pub basic: Option<f64>,
    pub salt_adjusted: Option<f64>,
}

impl WindowResult {
    pub fn value(&self, kind: FormulaKind) -> Option<f64> {
        match kind {
            FormulaKind::Basic => self.basic,
            FormulaKind::SaltAdjusted => self.salt_adjusted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowScanner {
    window_size: usize,
    formulas: Vec<TmFormula>,
}

impl WindowScanner {
    /// Creates a scanner evaluating every formula kind at most once. If a kind is
    /// given more than once only its first entry is kept.
    pub fn new(window_size: usize, requested: Vec<TmFormula>) -> Result<WindowScanner> {
        if window_size == 0 {
            return Err(TmError::InvalidWindowSize);
        }
        let mut formulas: Vec<TmFormula> = Vec::with_capacity(requested.len());
        for formula in requested {
            if formulas.iter().any(|f| f.kind() == formula.kind()) {
                warn!(
                    "{} formula requested more than once, keeping the first",
                    formula.kind()
                );
                continue;
            }
            formulas.push(formula);
        }
        if formulas.is_empty() {
            warn!("no formulas requested, windows will carry no values");
        }
        Ok(WindowScanner {
            window_size,
            formulas,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn formulas(&self) -> &[TmFormula] {
        &self.formulas
    }

    /// Slides the window over the sequence one base at a time and evaluates every
    /// formula at each offset. Produces `len - window_size + 1` results in increasing
    /// position order, or none if the sequence is shorter than the window.
    pub fn scan(&self, sequence: &[Base]) -> Vec<WindowResult> {
        if sequence.len() < self.window_size {
            warn!(
                "sequence shorter than window ({} < {}), no windows to scan",
                sequence.len(),
                self.window_size
            );
            return Vec::new();
        }

        let window_count = sequence.len() - self.window_size + 1;
        debug!(
            "scanning {} windows of size {} with {} formula(s)",
            window_count,
            self.window_size,
            self.formulas.len()
        );

        let mut counts = BaseCounts::of(&sequence[..self.window_size]);
        let mut results = Vec::with_capacity(window_count);
        for position in 0..window_count {
            if position > 0 {
                counts.remove(sequence[position - 1]);
                counts.add(sequence[position + self.window_size - 1]);
            }
            results.push(self.evaluate(position, &counts));
        }
        results
    }

    fn evaluate(&self, position: usize, counts: &BaseCounts) -> WindowResult {
        let mut result = WindowResult {
            position,
            basic: None,
            salt_adjusted: None,
        };
        for formula in &self.formulas {
            let tm = formula.tm_from_counts(counts);
            match formula.kind() {
                FormulaKind::Basic => result.basic = Some(tm),
                FormulaKind::SaltAdjusted => result.salt_adjusted = Some(tm),
            }
        }
        result
    }
}

/// Projects the scan results onto the `(position, value)` series of one formula.
/// Empty if the formula was not part of the scan.
pub fn signal(results: &[WindowResult], kind: FormulaKind) -> Vec<(usize, f64)> {
    results
        .iter()
        .filter_map(|result| result.value(kind).map(|value| (result.position, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tm::{Concentration, DEFAULT_NA_CONCENTRATION};
    use crate::validate;

    fn both() -> Vec<TmFormula> {
        vec![
            TmFormula::Basic,
            TmFormula::SaltAdjusted(Concentration::molar(DEFAULT_NA_CONCENTRATION).unwrap()),
        ]
    }

    #[test]
    fn window_count_and_positions() {
        let sequence = validate("TACGTGCGCGCGAGCTATCTACTGACTTACGACTAGTGTAGCTGCATCATCGATCGA").unwrap();
        let scanner = WindowScanner::new(9, both()).unwrap();
        let results = scanner.scan(&sequence);
        assert_eq!(results.len(), sequence.len() - 9 + 1);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.position, i);
        }
    }

    #[test]
    fn rolling_counts_match_recounting() {
        let sequence = validate("GGGGAAAATTTTCCCCGATCGATC").unwrap();
        let formulas = both();
        let results = WindowScanner::new(5, formulas.clone()).unwrap().scan(&sequence);
        for result in &results {
            let window = &sequence[result.position..result.position + 5];
            assert_eq!(result.basic, Some(formulas[0].tm(window).unwrap()));
            assert_eq!(result.salt_adjusted, Some(formulas[1].tm(window).unwrap()));
        }
    }

    #[test]
    fn short_sequence_yields_no_windows() {
        let sequence = validate("ACGTACGT").unwrap();
        let scanner = WindowScanner::new(9, both()).unwrap();
        assert!(scanner.scan(&sequence).is_empty());
    }

    #[test]
    fn window_equal_to_sequence_length() {
        let sequence = validate("GATC").unwrap();
        let results = WindowScanner::new(4, vec![TmFormula::Basic]).unwrap().scan(&sequence);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].basic, Some(12.));
        assert_eq!(results[0].salt_adjusted, None);
    }

    #[test]
    fn zero_window_is_rejected() {
        assert!(matches!(
            WindowScanner::new(0, both()),
            Err(TmError::InvalidWindowSize)
        ));
    }

    #[test]
    fn duplicate_formula_keeps_first_entry() {
        let low = TmFormula::SaltAdjusted(Concentration::molar(0.05).unwrap());
        let high = TmFormula::SaltAdjusted(Concentration::molar(1.).unwrap());
        let scanner = WindowScanner::new(9, vec![low, TmFormula::Basic, high]).unwrap();
        assert_eq!(scanner.formulas(), &[low, TmFormula::Basic][..]);

        let sequence = validate("ACGTACGTAC").unwrap();
        let results = scanner.scan(&sequence);
        for result in &results {
            let window = &sequence[result.position..result.position + 9];
            assert_eq!(result.salt_adjusted, Some(low.tm(window).unwrap()));
        }
    }

    #[test]
    fn empty_formula_set_yields_positions_only() {
        let sequence = validate("ACGTACGTAC").unwrap();
        let results = WindowScanner::new(9, Vec::new()).unwrap().scan(&sequence);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.basic.is_none() && r.salt_adjusted.is_none()));
    }

    #[test]
    fn signal_only_contains_requested_formula() {
        let sequence = validate("GCGCAT").unwrap();
        let results = WindowScanner::new(2, vec![TmFormula::Basic]).unwrap().scan(&sequence);
        assert_eq!(
            signal(&results, FormulaKind::Basic),
            vec![(0, 8.), (1, 8.), (2, 8.), (3, 6.), (4, 4.)]
        );
        assert!(signal(&results, FormulaKind::SaltAdjusted).is_empty());
    }
}
