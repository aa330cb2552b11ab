use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A carrier's pricing rule: `rate` is a tax fraction applied to the base cost,
/// `flat_fee` is added once per route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub name: String,
    pub rate: f64,
    pub flat_fee: f64,
}

impl Carrier {
    /// Creates a carrier, rejecting negative or non-finite tariffs
    pub fn new(name: impl Into<String>, rate: f64, flat_fee: f64) -> Result<Self> {
        let carrier = Self::new_unchecked(name, rate, flat_fee);
        carrier.validate()?;
        Ok(carrier)
    }

    pub(crate) fn new_unchecked(name: impl Into<String>, rate: f64, flat_fee: f64) -> Self {
        Carrier {
            name: name.into(),
            rate,
            flat_fee,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !self.rate.is_finite() || self.rate < 0.0 {
            format!("rate must be a non-negative number, got {}", self.rate)
        } else if !self.flat_fee.is_finite() || self.flat_fee < 0.0 {
            format!("flat fee must be a non-negative number, got {}", self.flat_fee)
        } else {
            return Ok(());
        };

        Err(Error::InvalidCarrier {
            name: self.name.clone(),
            reason,
        })
    }
}

/// Itemized price of one route for one carrier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// `None` when the destination is unreachable
    pub base: Option<f64>,
    pub tax: f64,
    pub flat_fee: f64,
    pub total: Option<f64>,
}

impl PriceBreakdown {
    pub const UNREACHABLE: PriceBreakdown = PriceBreakdown {
        base: None,
        tax: 0.0,
        flat_fee: 0.0,
        total: None,
    };
}

/// Rounds to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Prices a base cost with two-stage rounding: the tax is rounded first, then the
/// total that includes the rounded tax.
///
/// Stored historical breakdowns were produced this way, so the order must not change.
pub fn apply_tariff(base: Option<f64>, carrier: &Carrier) -> PriceBreakdown {
    let base = match base {
        Some(base) => base,
        None => return PriceBreakdown::UNREACHABLE,
    };

    let tax = round_half_up(base * carrier.rate);
    let total = round_half_up(base + tax + carrier.flat_fee);

    PriceBreakdown {
        base: Some(base),
        tax,
        flat_fee: carrier.flat_fee,
        total: Some(total),
    }
}

/// Prices a base cost with a single rounding over the unrounded tax.
///
/// This is the rule historical per-route `cost` values were computed with. It can
/// differ from [`apply_tariff`]'s total by one unit.
pub fn final_cost(base: Option<f64>, carrier: &Carrier) -> Option<f64> {
    base.map(|base| round_half_up(base + base * carrier.rate + carrier.flat_fee))
}
