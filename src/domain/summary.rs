use super::baggage::Baggage;
use super::rules;
use rust_decimal::Decimal;
use serde::Serialize;

/// Running totals over accepted bags.
///
/// This is a plain value: each accepted bag produces the next summary, so a
/// sequence of bags can be folded without any shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BaggageSummary {
    /// Number of accepted bags.
    pub count: usize,
    /// Combined weight (kg) of accepted bags.
    pub total_weight: Decimal,
}

impl BaggageSummary {
    pub const EMPTY: Self = Self {
        count: 0,
        total_weight: Decimal::ZERO,
    };

    /// Returns the summary with `baggage` added to the totals.
    ///
    /// Callers are expected to have already checked the bag is acceptable.
    /// Both totals saturate instead of overflowing.
    pub fn accept(self, baggage: &Baggage) -> Self {
        Self {
            count: self.count.saturating_add(1),
            total_weight: self.total_weight.saturating_add(baggage.weight()),
        }
    }

    /// Folds a sequence of bags, skipping the oversized ones.
    pub fn from_bags<'a, I>(bags: I) -> Self
    where
        I: IntoIterator<Item = &'a Baggage>,
    {
        bags.into_iter()
            .filter(|bag| !rules::exceeds_max_dimension_sum(bag))
            .fold(Self::EMPTY, Self::accept)
    }
}
