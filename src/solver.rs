//! Closed form algebra for a two resistor series divider.
//!
//! `vout = vcc * r2 / (r1 + r2)`, with the two rearrangements for `r1` and `r2`.

use crate::error::{DividerError, Result};

fn check_supply(supply: f64) -> Result<()> {
    if supply.is_finite() && supply > 0.0 {
        Ok(())
    } else {
        Err(DividerError::InvalidSupply { supply })
    }
}

fn check_output(supply: f64, output: f64) -> Result<()> {
    check_supply(supply)?;
    if output >= 0.0 && output < supply {
        Ok(())
    } else {
        Err(DividerError::out_of_range(output, supply))
    }
}

/// Output voltage tapped between `r1` (top) and `r2` (bottom).
/// # Examples
/// ```
///     # use voltdiv::compute_output_voltage;
///     assert_eq!(compute_output_voltage(10.0, 1000.0, 1000.0), Ok(5.0));
/// ```
pub fn compute_output_voltage(supply: f64, r1: f64, r2: f64) -> Result<f64> {
    let total = r1 + r2;
    if total == 0.0 {
        return Err(DividerError::ZeroResistance);
    }
    Ok(supply * r2 / total)
}

/// Top resistor needed for `output` given the bottom resistor `r2`.
pub fn compute_r1(supply: f64, output: f64, r2: f64) -> Result<f64> {
    check_output(supply, output)?;
    if output == 0.0 {
        return Err(DividerError::ZeroOutputVoltage);
    }
    let ratio = output / supply;
    Ok(r2 * (1.0 - ratio) / ratio)
}

/// Bottom resistor needed for `output` given the top resistor `r1`.
///
/// A zero `output` yields a zero `r2`.
pub fn compute_r2(supply: f64, output: f64, r1: f64) -> Result<f64> {
    check_output(supply, output)?;
    let ratio = output / supply;
    Ok(r1 * ratio / (1.0 - ratio))
}

/// A fully determined divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub supply: f64,
    pub output: f64,
    pub r1: f64,
    pub r2: f64,
}

impl Divider {
    /// Current flowing through both resistors.
    pub fn current(&self) -> f64 {
        self.supply / (self.r1 + self.r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equal_resistors_halve_supply() {
        assert_eq!(compute_output_voltage(10.0, 1000.0, 1000.0), Ok(5.0));
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            (5.0, 10_000.0, 4_700.0),
            (12.0, 1.0, 1.0),
            (3.3, 220.0, 68_000.0),
            (24.0, 1.5e6, 33.0),
        ];
        for &(vcc, r1, r2) in cases.iter() {
            let v = compute_output_voltage(vcc, r1, r2).unwrap();
            assert_relative_eq!(compute_r1(vcc, v, r2).unwrap(), r1, max_relative = 1e-9);
            assert_relative_eq!(compute_r2(vcc, v, r1).unwrap(), r2, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_zero_resistance() {
        assert_eq!(
            compute_output_voltage(5.0, 0.0, 0.0),
            Err(DividerError::ZeroResistance)
        );
    }

    #[test]
    fn test_zero_output_for_r1() {
        assert_eq!(
            compute_r1(5.0, 0.0, 100.0),
            Err(DividerError::ZeroOutputVoltage)
        );
        assert_eq!(compute_r2(5.0, 0.0, 100.0), Ok(0.0));
    }

    #[test]
    fn test_output_at_or_above_supply() {
        assert_eq!(
            compute_r2(5.0, 5.0, 100.0),
            Err(DividerError::out_of_range(5.0, 5.0))
        );
        assert_eq!(
            compute_r1(5.0, 6.0, 100.0),
            Err(DividerError::out_of_range(6.0, 5.0))
        );
        assert_eq!(
            compute_r2(5.0, -1.0, 100.0),
            Err(DividerError::out_of_range(-1.0, 5.0))
        );
    }

    #[test]
    fn test_invalid_supply() {
        assert_eq!(
            compute_r2(0.0, 0.0, 100.0),
            Err(DividerError::InvalidSupply { supply: 0.0 })
        );
        assert!(compute_r1(f64::NAN, 1.0, 100.0).is_err());
    }

    #[test]
    fn test_divider_current() {
        let d = Divider {
            supply: 10.0,
            output: 5.0,
            r1: 500.0,
            r2: 500.0,
        };
        assert_relative_eq!(d.current(), 0.01);
    }
}
