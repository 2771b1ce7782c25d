use serde_derive::Serialize;

use crate::{Result, TmError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extrema {
    pub min_value: f64,
    pub min_position: usize,
    pub max_value: f64,
    pub max_position: usize,
}

/// Minimum and maximum of a `(position, value)` series. On ties the first
/// occurrence wins. NaN values are skipped, a series holding nothing else
/// counts as empty.
pub fn extrema(series: &[(usize, f64)]) -> Result<Extrema> {
    let values = series.iter().copied().filter(|(_, value)| !value.is_nan());
    let (min, max) = min_max_by_value(values).ok_or(TmError::EmptyInput)?;
    Ok(Extrema {
        min_value: min.1,
        min_position: min.0,
        max_value: max.1,
        max_position: max.0,
    })
}

fn min_max_by_value<T>(mut it: T) -> Option<((usize, f64), (usize, f64))>
where
    T: Iterator<Item = (usize, f64)>,
{
    let head = it.next()?;
    let (mut min, mut max) = (head, head);
    // strict comparisons keep the earliest position
    for el in it {
        if el.1 < min.1 {
            min = el;
        }
        if el.1 > max.1 {
            max = el;
        }
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_ties() {
        let series = [(0, 10.), (1, 20.), (2, 20.), (3, 5.)];
        let ext = extrema(&series).unwrap();
        assert_eq!(ext.max_position, 1);
        assert_eq!(ext.max_value, 20.);
        assert_eq!(ext.min_position, 3);
        assert_eq!(ext.min_value, 5.);

        let flat = [(4, 1.), (5, 1.), (6, 1.)];
        let ext = extrema(&flat).unwrap();
        assert_eq!((ext.min_position, ext.max_position), (4, 4));
    }

    #[test]
    fn single_element() {
        let ext = extrema(&[(7, 3.5)]).unwrap();
        assert_eq!(
            ext,
            Extrema {
                min_value: 3.5,
                min_position: 7,
                max_value: 3.5,
                max_position: 7
            }
        );
    }

    #[test]
    fn nan_values_are_skipped() {
        let series = [(0, f64::NAN), (1, 3.), (2, f64::NAN), (3, 1.), (4, 3.)];
        let ext = extrema(&series).unwrap();
        assert_eq!((ext.min_position, ext.min_value), (3, 1.));
        assert_eq!((ext.max_position, ext.max_value), (1, 3.));

        assert!(matches!(
            extrema(&[(0, f64::NAN), (1, f64::NAN)]),
            Err(TmError::EmptyInput)
        ));
    }

    #[test]
    fn empty_series_is_an_error() {
        assert!(matches!(extrema(&[]), Err(TmError::EmptyInput)));
    }
}
