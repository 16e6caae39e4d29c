//! Picks what to solve for based on which quantities are unknown.

use tracing::info;

use crate::error::{DividerError, Result};
use crate::matcher::{find_pairs_in, CandidatePair};
use crate::solver::{compute_output_voltage, compute_r1, compute_r2, Divider};
use crate::RSeries;

/// Inputs to a divider calculation, `None` marks an unknown quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerInputs {
    pub supply: f64,
    pub output: Option<f64>,
    pub r1: Option<f64>,
    pub r2: Option<f64>,
    /// Minimum current when searching for pairs, `0.0` disables the constraint
    pub min_current: f64,
}

/// Outcome of [`DividerInputs::solve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Every quantity is known
    Single(Divider),
    /// Both resistors were unknown, standard pairs in ascending R1 order
    Pairs {
        supply: f64,
        output: f64,
        pairs: Vec<CandidatePair>,
    },
}

impl DividerInputs {
    /// Solves for whichever quantity is missing.
    ///
    /// An unknown output voltage is computed from both resistors. Otherwise a single unknown
    /// resistor is solved for directly, and two unknown resistors trigger a search of `series`.
    /// With nothing unknown the inputs are returned as they are.
    pub fn solve(&self, series: &RSeries) -> Result<Solution> {
        let supply = self.supply;
        if !(supply.is_finite() && supply > 0.0) {
            return Err(DividerError::InvalidSupply { supply });
        }

        let divider = match (self.output, self.r1, self.r2) {
            (None, Some(r1), Some(r2)) => {
                info!("solving for output voltage");
                let output = compute_output_voltage(supply, r1, r2)?;
                Divider { supply, output, r1, r2 }
            }
            (None, None, _) => return Err(DividerError::Underdetermined { missing: "R1" }),
            (None, _, None) => return Err(DividerError::Underdetermined { missing: "R2" }),
            (Some(output), Some(r1), None) => {
                info!("solving for R2");
                let r2 = compute_r2(supply, output, r1)?;
                Divider { supply, output, r1, r2 }
            }
            (Some(output), None, Some(r2)) => {
                info!("solving for R1");
                let r1 = compute_r1(supply, output, r2)?;
                Divider { supply, output, r1, r2 }
            }
            (Some(output), None, None) => {
                info!(series_len = series.len(), "searching standard resistor pairs");
                let pairs = find_pairs_in(series, supply, output, self.min_current)?;
                info!(found = pairs.len(), "search finished");
                return Ok(Solution::Pairs { supply, output, pairs });
            }
            (Some(output), Some(r1), Some(r2)) => {
                info!("all quantities given, nothing to solve");
                Divider { supply, output, r1, r2 }
            }
        };
        Ok(Solution::Single(divider))
    }
}
