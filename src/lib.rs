//! A voltage divider calculator for circuit design.
//!
//! Given a supply voltage and any two of the output voltage, R1 (top) and R2 (bottom), it solves
//! for the third. When both resistors are left open it instead lists R1 values from a standard
//! preferred-value series whose partner R2 also lands on that series within ±10%.
//!
//! ```text
//!   VCC
//!    |
//!   [R1]
//!    |---- VOUT
//!   [R2]
//!    |
//!   GND
//! ```
//!
//! # Example
//! ```rust
//! use voltdiv::*;
//!
//! let inputs = DividerInputs {
//!     supply: 12.0,
//!     output: Some(6.0),
//!     r1: None,
//!     r2: None,
//!     min_current: 0.0,
//! };
//!
//! match inputs.solve(&E24).unwrap() {
//!     Solution::Pairs { pairs, .. } => {
//!         assert_eq!(pairs.len(), 24);
//!         assert_eq!(pairs[0].r1, 1.0);
//!     }
//!     Solution::Single(_) => unreachable!(),
//! }
//! ```
//! Rendering the same solution with `println!("{}", solution)` produces:
//! ```text
//! Supply voltage: 12.0 V
//!  R1 [Ω] | R2 [Ω] | V_out [V] |  I [A]
//! --------+--------+-----------+--------
//!     1.0 |    1.0 |       6.0 | 12.000
//!     1.1 |    1.1 |       6.0 | 10.909
//! ...
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;

use itertools::Itertools;

pub mod error;
mod matcher;
mod mode;
pub mod render;
mod solver;

pub use error::{DividerError, Result};
pub use matcher::{find_pairs, find_pairs_in, match_series, CandidatePair};
pub use mode::{DividerInputs, Solution};
pub use solver::{compute_output_voltage, compute_r1, compute_r2, Divider};

/// Width of the acceptance band around a series value when matching.
pub const TOLERANCE: f64 = 0.1;

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A single decade of preferred resistor values, held in ascending order.
///
/// Values are used literally, no decade multiples are generated.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    fn new(series: &[f64]) -> Self {
        let mut values = series.to_vec();
        values.sort_by(f64::total_cmp);
        RSeries {
            values: values.into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        let add = RSeries::new(add);
        RSeries {
            values: base
                .iter()
                .merge(add.iter())
                .cloned()
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    /// Iterate the series in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    /// Number of values in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first value in ascending order whose ±10% band contains `value`.
    ///
    /// This is the first value within tolerance, not necessarily the closest one.
    /// # Examples
    /// ```
    ///     # use voltdiv::E24;
    ///     assert_eq!(E24.match_value(1.05), Some(1.0));
    ///     assert_eq!(E24.match_value(1.19), Some(1.1));
    ///     assert_eq!(E24.match_value(20.0), None);
    /// ```
    pub fn match_value(&self, value: f64) -> Option<f64> {
        self.iter()
            .find(|&&ex| value >= ex * (1.0 - TOLERANCE) && value <= ex * (1.0 + TOLERANCE))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths() {
        assert_eq!(E3.len(), 3);
        assert_eq!(E6.len(), 6);
        assert_eq!(E12.len(), 12);
        assert_eq!(E24.len(), 24);
    }

    #[test]
    fn test_e24_order() {
        let expected = [
            1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7,
            5.1, 5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
        ];
        assert_eq!(E24.iter().cloned().collect::<Vec<_>>(), expected.to_vec());
    }

    #[test]
    fn test_e12_order() {
        let expected = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];
        assert_eq!(E12.iter().cloned().collect::<Vec<_>>(), expected.to_vec());
    }

    #[test]
    fn test_match_first_not_closest() {
        assert_eq!(E24.match_value(1.05), Some(1.0));
        assert_eq!(E24.match_value(1.15), Some(1.1));
        // 1.19 is closer to 1.2 but 1.1 is scanned first
        assert_eq!(E24.match_value(1.19), Some(1.1));
    }

    #[test]
    fn test_match_band_edges() {
        assert_eq!(E24.match_value(0.95), Some(1.0));
        assert_eq!(E24.match_value(0.85), None);
        assert_eq!(E24.match_value(10.0), Some(9.1));
        assert_eq!(E24.match_value(10.5), None);
    }

    #[test]
    fn test_match_in_coarse_series() {
        // gap between 1.0 and 2.2 in E3
        assert_eq!(E3.match_value(1.5), None);
        assert_eq!(E3.match_value(2.1), Some(2.2));
    }
}
