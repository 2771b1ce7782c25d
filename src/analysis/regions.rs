use serde_derive::Serialize;

/// Maximal run of consecutive positions whose value is at or above a threshold.
/// Both ends are inclusive. An interval with `start > end` has length 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdInterval {
    pub start: usize,
    pub end: usize,
}

impl ThresholdInterval {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

/// Collects the regions of the series with `value >= threshold` in a single pass.
/// A non qualifying value, a gap in the positions or the end of the series closes
/// the open region.
pub fn threshold_regions(series: &[(usize, f64)], threshold: f64) -> Vec<ThresholdInterval> {
    let mut regions = Vec::new();
    let mut open: Option<ThresholdInterval> = None;

    for &(position, value) in series {
        let above = value >= threshold;
        open = match open {
            Some(mut region) if above && position == region.end + 1 => {
                region.end = position;
                Some(region)
            }
            current => {
                regions.extend(current);
                if above {
                    Some(ThresholdInterval {
                        start: position,
                        end: position,
                    })
                } else {
                    None
                }
            }
        };
    }
    regions.extend(open);
    regions
}

/// Marks every position in `0..len` covered by one of the intervals. This is the
/// mask drawn as a filled bar below the signal.
pub fn region_track(intervals: &[ThresholdInterval], len: usize) -> Vec<bool> {
    let mut track = vec![false; len];
    for interval in intervals {
        if interval.start >= len {
            continue;
        }
        let end = interval.end.min(len - 1);
        for covered in &mut track[interval.start..=end] {
            *covered = true;
        }
    }
    track
}
