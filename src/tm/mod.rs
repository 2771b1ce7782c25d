//! Melting temperature formulas.
//!
//! Both formulas only depend on how often each base occurs in a window, so they are
//! evaluated on a [`BaseCounts`] table. This lets the scanner keep a rolling count
//! while sliding instead of recounting every window.
use serde_derive::{Deserialize, Serialize};

use std::fmt;
use std::ops::Index;

use super::{Base, Result, TmError};

/// Default Na+ concentration in mol/l.
pub const DEFAULT_NA_CONCENTRATION: f64 = 0.05;

/// Number of occurrences of every base, indexed by `Base`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseCounts {
    counts: [usize; 4],
}

impl BaseCounts {
    /// Counts the bases of the window from left to right.
    pub fn of(window: &[Base]) -> BaseCounts {
        window.iter().fold(BaseCounts::default(), |mut counts, base| {
            counts.add(*base);
            counts
        })
    }

    pub fn add(&mut self, base: Base) {
        self.counts[base as usize] += 1;
    }

    /// Removes one occurrence of `base`. Must only be called for bases that were added.
    pub fn remove(&mut self, base: Base) {
        debug_assert!(self.counts[base as usize] > 0);
        self.counts[base as usize] -= 1;
    }

    pub fn gc(&self) -> usize {
        self[Base::G] + self[Base::C]
    }

    pub fn at(&self) -> usize {
        self[Base::A] + self[Base::T]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Index<Base> for BaseCounts {
    type Output = usize;

    fn index(&self, base: Base) -> &usize {
        &self.counts[base as usize]
    }
}

/// A Na+ concentration in mol/l that is known to be greater than 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration(f64);

impl Concentration {
    pub fn molar(value: f64) -> Result<Concentration> {
        // also rejects NaN
        if value > 0. && value.is_finite() {
            Ok(Concentration(value))
        } else {
            Err(TmError::InvalidConcentration(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Identifies a formula independent of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaKind {
    Basic,
    SaltAdjusted,
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormulaKind::Basic => write!(f, "basic"),
            FormulaKind::SaltAdjusted => write!(f, "salt-adjusted"),
        }
    }
}

/// A melting temperature formula together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TmFormula {
    /// Wallace rule, Tm = 4(G + C) + 2(A + T).
    Basic,
    /// Howley et al. (1979), Tm = 81.5 + 16.6 log10([Na+]) + 0.41 (%GC) - 600 / N.
    SaltAdjusted(Concentration),
}

impl TmFormula {
    pub fn kind(&self) -> FormulaKind {
        match self {
            TmFormula::Basic => FormulaKind::Basic,
            TmFormula::SaltAdjusted(_) => FormulaKind::SaltAdjusted,
        }
    }

    /// Melting temperature of the window in °C.
    pub fn tm(&self, window: &[Base]) -> Result<f64> {
        if window.is_empty() {
            return Err(TmError::EmptyWindow);
        }
        Ok(self.tm_from_counts(&BaseCounts::of(window)))
    }

    /// Evaluates the formula on already counted bases. `counts` must not be empty.
    pub(crate) fn tm_from_counts(&self, counts: &BaseCounts) -> f64 {
        match self {
            TmFormula::Basic => (4 * counts.gc() + 2 * counts.at()) as f64,
            TmFormula::SaltAdjusted(concentration) => {
                let len = counts.total() as f64;
                let gc_percent = counts.gc() as f64 / len * 100.;
                81.5 + 16.6 * concentration.value().log10() + 0.41 * gc_percent - 600. / len
            }
        }
    }
}

pub fn basic_tm(window: &[Base]) -> Result<f64> {
    TmFormula::Basic.tm(window)
}

pub fn salt_adjusted_tm(window: &[Base], na_concentration: f64) -> Result<f64> {
    if window.is_empty() {
        return Err(TmError::EmptyWindow);
    }
    TmFormula::SaltAdjusted(Concentration::molar(na_concentration)?).tm(window)
}
