//! Turning raw cost cells into a [`CostMatrix`].
//!
//! Cost tables come from people typing into a terminal or a form, so the default
//! behaviour is forgiving: anything that is not a finite number becomes "no edge".
//! [`ParseMode::Strict`] turns that coercion into an error instead.

use serde::{Deserialize, Serialize};

use crate::config::NodeLimits;
use crate::graph::matrix::CostMatrix;
use crate::{Error, Result};

/// Numeric value historically used to mean "no direct flight"
pub const LEGACY_NO_EDGE: f64 = 99999.0;

/// How to treat cells that are neither a number nor an explicit no-edge marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Malformed cells silently become "no edge"
    #[default]
    Lenient,
    /// Malformed cells are a [`Error::MalformedToken`]
    Strict,
}

/// A single cell of a JSON cost matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixCell {
    Number(f64),
    Text(String),
    Missing,
}

impl MatrixCell {
    /// Resolves the cell with the same rules as a typed token
    pub fn resolve(&self, mode: ParseMode, row: usize, col: usize) -> Result<Option<f64>> {
        match self {
            MatrixCell::Number(value) => Ok(finite_cost(*value)),
            MatrixCell::Text(token) => parse_cell(token, mode, row, col),
            MatrixCell::Missing => Ok(None),
        }
    }
}

fn finite_cost(value: f64) -> Option<f64> {
    if value.is_finite() && value != LEGACY_NO_EDGE {
        Some(value)
    } else {
        None
    }
}

/// Parses one cost token.
///
/// `INF` (any case), the empty string and `99999` mean "no edge".
pub fn parse_cell(token: &str, mode: ParseMode, row: usize, col: usize) -> Result<Option<f64>> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("inf") {
        return Ok(None);
    }

    match token.parse::<f64>() {
        Ok(value) => Ok(finite_cost(value)),
        Err(_) => match mode {
            ParseMode::Lenient => {
                log::debug!("Treating malformed cost {:?} at ({}, {}) as no edge", token, row, col);
                Ok(None)
            }
            ParseMode::Strict => Err(Error::MalformedToken {
                row,
                col,
                token: token.to_string(),
            }),
        },
    }
}

/// Parses one whitespace-separated row of exactly `n` costs
pub fn parse_row(line: &str, n: usize, row: usize, mode: ParseMode) -> Result<Vec<Option<f64>>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(Error::InvalidDimension {
            what: "columns",
            expected: n,
            found: tokens.len(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(col, token)| parse_cell(token, mode, row, col))
        .collect()
}

/// Parses a whole matrix, one row per non-blank line
pub fn parse_matrix(
    labels: Vec<String>,
    text: &str,
    limits: NodeLimits,
    mode: ParseMode,
) -> Result<CostMatrix<f64>> {
    let n = labels.len();
    let weights = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| parse_row(line, n, row, mode))
        .collect::<Result<Vec<_>>>()?;

    CostMatrix::with_limits(labels, weights, limits)
}

/// Builds a matrix from JSON cells
pub fn matrix_from_cells(
    labels: Vec<String>,
    cells: &[Vec<MatrixCell>],
    limits: NodeLimits,
    mode: ParseMode,
) -> Result<CostMatrix<f64>> {
    let weights = cells
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| cell.resolve(mode, row, col))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    CostMatrix::with_limits(labels, weights, limits)
}
