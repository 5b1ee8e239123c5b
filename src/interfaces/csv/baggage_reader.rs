use crate::domain::baggage::Baggage;
use crate::error::{BaggageError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the input CSV, before validation.
///
/// Dimensions that are negative or not whole numbers are already rejected
/// by deserialization into `u32`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BaggageEntry {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub weight: Decimal,
}

impl TryFrom<BaggageEntry> for Baggage {
    type Error = BaggageError;

    fn try_from(entry: BaggageEntry) -> Result<Self> {
        if entry.weight < Decimal::ZERO {
            return Err(BaggageError::ValidationError(format!(
                "Weight must not be negative, got {}",
                entry.weight
            )));
        }
        Ok(Baggage::new(
            entry.length,
            entry.width,
            entry.height,
            entry.weight,
        ))
    }
}

/// Reads baggage entries from a CSV source.
///
/// Expects a header row naming `length`, `width`, `height` and `weight`.
/// Whitespace around fields is trimmed.
pub struct BaggageReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BaggageReader<R> {
    /// Creates a new `BaggageReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates entries.
    ///
    /// A bad row yields an `Err` item; later rows are still read.
    pub fn entries(self) -> impl Iterator<Item = Result<Baggage>> {
        self.reader
            .into_deserialize::<BaggageEntry>()
            .map(|result| result.map_err(BaggageError::from).and_then(Baggage::try_from))
    }
}
