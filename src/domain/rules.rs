//! Airline baggage rules.
//!
//! Every function here is pure and total: the same bag always yields the same
//! answer, and no input can make them fail.

use super::baggage::Baggage;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Weight (kg) above which a surcharge applies.
pub const MAX_REGULAR_WEIGHT: Decimal = dec!(22.0);
/// Charge per kilogram over `MAX_REGULAR_WEIGHT`.
pub const SURCHARGE_PER_KG: Decimal = dec!(3.00);
/// Every dimension (cm) must be strictly below this to travel as carry-on.
pub const MAX_CARRYON_DIMENSION: u32 = 36;
/// Bags whose dimensions sum (cm) above this are not accepted.
pub const MAX_SUM_DIMENSIONS: u64 = 192;

/// The outcome of running every rule against one bag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub overweight: bool,
    pub surcharge: Decimal,
    pub carry_on: bool,
    pub oversized: bool,
}

pub fn is_overweight(baggage: &Baggage) -> bool {
    baggage.weight() > MAX_REGULAR_WEIGHT
}

/// Surcharge owed for the weight above `MAX_REGULAR_WEIGHT`, zero otherwise.
///
/// Saturates at `Decimal::MAX` for weights near the top of the decimal range.
pub fn weight_surcharge(baggage: &Baggage) -> Decimal {
    if is_overweight(baggage) {
        baggage
            .weight()
            .saturating_sub(MAX_REGULAR_WEIGHT)
            .saturating_mul(SURCHARGE_PER_KG)
    } else {
        Decimal::ZERO
    }
}

pub fn is_carry_on(baggage: &Baggage) -> bool {
    baggage
        .dimensions()
        .iter()
        .all(|&dimension| dimension < MAX_CARRYON_DIMENSION)
}

pub fn dimension_sum(baggage: &Baggage) -> u64 {
    baggage.dimensions().iter().map(|&d| u64::from(d)).sum()
}

/// Acceptance gate: bags over the limit are rejected outright.
pub fn exceeds_max_dimension_sum(baggage: &Baggage) -> bool {
    dimension_sum(baggage) > MAX_SUM_DIMENSIONS
}

pub fn classify(baggage: &Baggage) -> Classification {
    Classification {
        overweight: is_overweight(baggage),
        surcharge: weight_surcharge(baggage),
        carry_on: is_carry_on(baggage),
        oversized: exceeds_max_dimension_sum(baggage),
    }
}
