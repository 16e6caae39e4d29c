//! Search of a preferred-value series for buildable R1/R2 pairs.

use tracing::debug;

use crate::error::Result;
use crate::solver::{compute_output_voltage, compute_r2};
use crate::{RSeries, E24};

/// A candidate R1 from the series together with its computed partner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair {
    /// Series value used as R1
    pub r1: f64,
    /// R2 derived from the target output voltage
    pub r2: f64,
    /// Series value whose tolerance band accepted `r2`
    pub r2_match: f64,
}

impl CandidatePair {
    /// Output voltage produced by `r1` and the computed `r2`.
    pub fn output_voltage(&self, supply: f64) -> Result<f64> {
        compute_output_voltage(supply, self.r1, self.r2)
    }

    /// Current through R1 if it were placed straight across the supply.
    pub fn current(&self, supply: f64) -> f64 {
        supply / self.r1
    }
}

/// Matches `value` against the E24 series, see [`RSeries::match_value`].
pub fn match_series(value: f64) -> Option<f64> {
    E24.match_value(value)
}

/// Finds E24 resistor pairs approximating `output` from `supply`.
/// # Examples
/// ```
///     # use voltdiv::find_pairs;
///     let pairs = find_pairs(12.0, 6.0, 0.0).unwrap();
///     assert_eq!((pairs[0].r1, pairs[0].r2), (1.0, 1.0));
/// ```
pub fn find_pairs(supply: f64, output: f64, min_current: f64) -> Result<Vec<CandidatePair>> {
    find_pairs_in(&E24, supply, output, min_current)
}

/// Walks `series` in ascending order treating each value as R1, computes R2 for the target
/// output, and keeps the pairs whose R2 falls within tolerance of a series value. A positive
/// `min_current` additionally drops any R1 with `supply / r1 < min_current`.
///
/// An empty result is not an error. Errors are only returned for supply and output voltages
/// that no divider can produce.
pub fn find_pairs_in(
    series: &RSeries,
    supply: f64,
    output: f64,
    min_current: f64,
) -> Result<Vec<CandidatePair>> {
    let mut pairs = Vec::new();
    for &r1 in series.iter() {
        let r2 = compute_r2(supply, output, r1)?;

        if min_current > 0.0 && supply / r1 < min_current {
            debug!(r1, current = supply / r1, min_current, "below minimum current");
            continue;
        }

        match series.match_value(r2) {
            Some(r2_match) => {
                debug!(r1, r2, r2_match, "accepted");
                pairs.push(CandidatePair { r1, r2, r2_match });
            }
            None => debug!(r1, r2, "no series value within tolerance"),
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DividerError;
    use crate::E12;
    use approx::assert_relative_eq;

    fn r1s(pairs: &[CandidatePair]) -> Vec<f64> {
        pairs.iter().map(|p| p.r1).collect()
    }

    #[test]
    fn test_match_series() {
        assert_eq!(match_series(1.05), Some(1.0));
        assert_eq!(match_series(1.15), Some(1.1));
        assert_eq!(match_series(0.5), None);
    }

    #[test]
    fn test_half_supply_matches_every_value() {
        let pairs = find_pairs(12.0, 6.0, 0.0).unwrap();
        assert_eq!(pairs.len(), 24);
        assert_eq!(pairs[0], CandidatePair { r1: 1.0, r2: 1.0, r2_match: 1.0 });
        for p in pairs.iter() {
            assert_relative_eq!(p.r1, p.r2, max_relative = 1e-12);
            assert_relative_eq!(p.output_voltage(12.0).unwrap(), 6.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_results_ascending() {
        let pairs = find_pairs(5.0, 3.3, 0.0).unwrap();
        assert_eq!(
            r1s(&pairs),
            vec![
                1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3,
                4.7, 5.1
            ]
        );
        // 1.0 * 0.66 / 0.34 ~= 1.94 lands in the 1.8 band before 2.0
        assert_eq!(pairs[0].r2_match, 1.8);
    }

    #[test]
    fn test_low_ratio_keeps_top_of_decade() {
        let pairs = find_pairs(10.0, 1.0, 0.0).unwrap();
        assert_eq!(r1s(&pairs), vec![8.2, 9.1]);
        assert_eq!(pairs[0].r2_match, 1.0);
    }

    #[test]
    fn test_min_current_filter() {
        assert_eq!(find_pairs(10.0, 5.0, 0.001).unwrap().len(), 24);

        let pairs = find_pairs(10.0, 5.0, 2.0).unwrap();
        assert_eq!(pairs.len(), 17);
        assert!(pairs.iter().all(|p| p.current(10.0) >= 2.0));
        assert_eq!(pairs.last().unwrap().r1, 4.7);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(find_pairs(10.0, 9.9, 0.0), Ok(Vec::new()));
        assert_eq!(find_pairs(10.0, 0.0, 0.0), Ok(Vec::new()));
    }

    #[test]
    fn test_out_of_range_output() {
        assert_eq!(
            find_pairs(5.0, 5.0, 0.0),
            Err(DividerError::out_of_range(5.0, 5.0))
        );
    }

    #[test]
    fn test_other_series() {
        let pairs = find_pairs_in(&E12, 12.0, 6.0, 0.0).unwrap();
        assert_eq!(pairs.len(), 12);
    }
}
