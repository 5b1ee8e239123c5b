use crate::domain::baggage::Baggage;
use crate::domain::rules::{self, Classification};
use crate::domain::summary::BaggageSummary;

/// A bag together with the result of every rule evaluated against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub baggage: Baggage,
    pub classification: Classification,
}

impl Assessment {
    /// Oversized bags are rejected; everything else is accepted.
    pub fn is_accepted(&self) -> bool {
        !self.classification.oversized
    }
}

/// Checks a stream of bags against the airline rules.
///
/// The checker owns the running `BaggageSummary`. Accepted bags are folded
/// into it as they are processed, rejected bags leave it untouched.
#[derive(Debug, Default)]
pub struct BaggageChecker {
    summary: BaggageSummary,
}

impl BaggageChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `baggage` and, if it is accepted, adds it to the totals.
    pub fn process(&mut self, baggage: Baggage) -> Assessment {
        let assessment = Assessment {
            baggage,
            classification: rules::classify(&baggage),
        };

        if assessment.is_accepted() {
            self.summary = self.summary.accept(&baggage);
            tracing::debug!(
                length = baggage.length(),
                width = baggage.width(),
                height = baggage.height(),
                weight = %baggage.weight(),
                carry_on = assessment.classification.carry_on,
                surcharge = %assessment.classification.surcharge,
                "bag accepted"
            );
        } else {
            tracing::debug!(
                dimension_sum = rules::dimension_sum(&baggage),
                "bag rejected as oversized"
            );
        }

        assessment
    }

    pub fn summary(&self) -> BaggageSummary {
        self.summary
    }

    /// Consumes the checker and returns the final totals.
    pub fn into_summary(self) -> BaggageSummary {
        self.summary
    }
}
