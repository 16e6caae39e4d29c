//! Text output for solutions: a schematic for single dividers and a table for pair searches.
//!
//! Nothing here does any circuit maths beyond reading values back out of a [`Solution`].

use itertools::Itertools;

use std::fmt;

use crate::matcher::CandidatePair;
use crate::mode::Solution;
use crate::solver::Divider;

fn scaled(value: f64, prec: usize, steps: &[(f64, f64, &str)]) -> String {
    match steps.iter().find(|(bound, _, _)| value > *bound) {
        Some((_, div, prefix)) => format!("{:.*} {}", prec, value / div, prefix),
        None => format!("{:.*}", prec, value),
    }
}

/// Formats ohms with an `M` or `k` prefix above one million or one thousand.
/// # Examples
/// ```
///     # use voltdiv::render::format_resistance;
///     assert_eq!(format_resistance(4700.0), "4.7 k");
///     assert_eq!(format_resistance(1000.0), "1000.0");
/// ```
pub fn format_resistance(r: f64) -> String {
    scaled(r, 1, &[(1e6, 1e6, "M"), (1e3, 1e3, "k")])
}

/// Formats volts with an `M` or `k` prefix above one million or one thousand.
pub fn format_voltage(v: f64) -> String {
    scaled(v, 1, &[(1e6, 1e6, "M"), (1e3, 1e3, "k")])
}

/// Formats amps, using `µ` up to 100µA and `m` up to 100mA.
/// # Examples
/// ```
///     # use voltdiv::render::format_current;
///     assert_eq!(format_current(0.00005), "50.000 µ");
///     assert_eq!(format_current(0.02), "20.000 m");
///     assert_eq!(format_current(1.5), "1.500");
/// ```
pub fn format_current(i: f64) -> String {
    if i <= 1e-4 {
        format!("{:.3} µ", i * 1e6)
    } else if i <= 0.1 {
        format!("{:.3} m", i * 1e3)
    } else {
        format!("{:.3}", i)
    }
}

/// A text table of right aligned cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Init a new table with the given column headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, missing cells render empty and extra cells are dropped.
    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .fold(h.chars().count(), usize::max)
            })
            .collect()
    }
}

fn write_line(f: &mut fmt::Formatter, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!(" {:>w$} ", c, w = w))
        .join("|");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;
        writeln!(f, "{}", widths.iter().map(|w| "-".repeat(w + 2)).join("+"))?;
        for row in self.rows.iter() {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Diagram of a single divider annotated with its values.
#[derive(Debug, Clone, Copy)]
pub struct Schematic<'a>(pub &'a Divider);

impl<'a> fmt::Display for Schematic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.0;
        writeln!(f, "  |------- {} V", format_voltage(d.supply))?;
        writeln!(f, "  |")?;
        writeln!(f, " |\u{AF}|")?;
        writeln!(f, " | |       {} \u{3A9}", format_resistance(d.r1))?;
        writeln!(f, " |_|")?;
        writeln!(f, "  |")?;
        writeln!(f, "  |------- {} V", format_voltage(d.output))?;
        writeln!(f, "  |")?;
        writeln!(f, " |\u{AF}|")?;
        writeln!(f, " | |       {} \u{3A9}", format_resistance(d.r2))?;
        writeln!(f, " |_|")?;
        writeln!(f, "  |")?;
        writeln!(f, "  |------- 0 V")
    }
}

/// Builds the result table for a pair search.
pub fn pairs_table(supply: f64, pairs: &[CandidatePair]) -> Table {
    pairs.iter().fold(
        Table::new(vec!["R1 [\u{3A9}]", "R2 [\u{3A9}]", "V_out [V]", "I [A]"]),
        |table, p| {
            let vout = p
                .output_voltage(supply)
                .map(format_voltage)
                .unwrap_or_else(|_| "-".to_string());
            table.row(vec![
                format_resistance(p.r1),
                format_resistance(p.r2),
                vout,
                format_current(p.current(supply)),
            ])
        },
    )
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Solution::Single(d) => write!(f, "{}", Schematic(d)),
            Solution::Pairs { supply, output, pairs } => {
                writeln!(f, "Supply voltage: {} V", format_voltage(*supply))?;
                if pairs.is_empty() {
                    writeln!(
                        f,
                        "No standard resistor pairs give {} V",
                        format_voltage(*output)
                    )
                } else {
                    write!(f, "{}", pairs_table(*supply, pairs))
                }
            }
        }
    }
}
