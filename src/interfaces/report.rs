use crate::application::checker::Assessment;
use crate::domain::baggage::Baggage;
use crate::domain::rules::{self, Classification, MAX_REGULAR_WEIGHT};
use crate::domain::summary::BaggageSummary;
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

pub const WELCOME_MESSAGE: &str = "Welcome to the Baggage Handler Software Program";
pub const OVERSIZED_MESSAGE: &str = "This is oversized; it is not acceptable.";
pub const TERMINATED_MESSAGE: &str = "The program has terminated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable description per bag, then the totals.
    #[default]
    Text,
    /// A single JSON document with every bag and the totals.
    Json,
}

/// Rounds half away from zero to two places for display.
///
/// `{:.2}` on a `Decimal` truncates, so amounts are rounded first.
fn cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Describes an accepted bag: its measurements, then carry-on and surcharge
/// notes where they apply.
pub fn describe(baggage: &Baggage, classification: &Classification) -> String {
    let mut result = format!(
        "This bag has length {} cm, width {} cm, height {} cm, and weight {:.2} kg.\n",
        baggage.length(),
        baggage.width(),
        baggage.height(),
        cents(baggage.weight())
    );

    if classification.carry_on {
        result.push_str("This bag can be used as a carry-on.\n");
    }

    if classification.overweight {
        result.push_str(&format!(
            "This bag is overweight; it exceeds the allowed weight of {:.2} kg. A surcharge of ${:.2} applies.\n",
            cents(MAX_REGULAR_WEIGHT),
            cents(classification.surcharge)
        ));
    }

    result
}

pub fn summary_lines(summary: &BaggageSummary) -> String {
    format!(
        "The total number of valid bags entered was: {}\nThe total weight entered was: {:.2} kg\n",
        summary.count,
        cents(summary.total_weight)
    )
}

#[derive(Debug, Serialize)]
struct BagReport {
    length: u32,
    width: u32,
    height: u32,
    weight: Decimal,
    dimension_sum: u64,
    oversized: bool,
    carry_on: bool,
    overweight: bool,
    surcharge: Decimal,
    accepted: bool,
}

impl From<&Assessment> for BagReport {
    fn from(assessment: &Assessment) -> Self {
        let baggage = &assessment.baggage;
        let classification = &assessment.classification;
        Self {
            length: baggage.length(),
            width: baggage.width(),
            height: baggage.height(),
            weight: baggage.weight(),
            dimension_sum: rules::dimension_sum(baggage),
            oversized: classification.oversized,
            carry_on: classification.carry_on,
            overweight: classification.overweight,
            surcharge: classification.surcharge,
            accepted: assessment.is_accepted(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    bags: &'a [BagReport],
    summary: &'a BaggageSummary,
}

/// Writes assessments and the final summary to any `Write` sink.
///
/// Text output is streamed as each bag arrives. JSON output is buffered and
/// emitted as one document by `finish`.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
    bags: Vec<BagReport>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
            bags: Vec::new(),
        }
    }

    /// Writes the opening banner. JSON output has none.
    pub fn begin(&mut self) -> Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.writer, "{}", WELCOME_MESSAGE)?;
        }
        Ok(())
    }

    pub fn write_assessment(&mut self, assessment: &Assessment) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                if assessment.is_accepted() {
                    let description = describe(&assessment.baggage, &assessment.classification);
                    writeln!(self.writer, "{}", description)?;
                } else {
                    writeln!(self.writer, "{}\n", OVERSIZED_MESSAGE)?;
                }
            }
            ReportFormat::Json => self.bags.push(BagReport::from(assessment)),
        }
        Ok(())
    }

    /// Writes the totals and flushes the underlying writer.
    pub fn finish(mut self, summary: &BaggageSummary) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                write!(self.writer, "{}", summary_lines(summary))?;
                writeln!(self.writer, "{}", TERMINATED_MESSAGE)?;
            }
            ReportFormat::Json => {
                let report = Report {
                    bags: &self.bags,
                    summary,
                };
                serde_json::to_writer_pretty(&mut self.writer, &report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
