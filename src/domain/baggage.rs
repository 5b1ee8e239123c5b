use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_LENGTH: u32 = 65;
pub const DEFAULT_WIDTH: u32 = 25;
pub const DEFAULT_HEIGHT: u32 = 50;
pub const DEFAULT_WEIGHT: Decimal = dec!(10.0);

/// A single piece of baggage.
///
/// Dimensions are whole centimetres and weight is in kilograms. The record
/// performs no range checks of its own; values are validated where they
/// enter the program (see `interfaces::csv`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baggage {
    length: u32,
    width: u32,
    height: u32,
    weight: Decimal,
}

impl Default for Baggage {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_WEIGHT)
    }
}

impl Baggage {
    pub fn new(length: u32, width: u32, height: u32, weight: Decimal) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Decimal) {
        self.weight = weight;
    }

    /// The three dimensions in (length, width, height) order.
    pub fn dimensions(&self) -> [u32; 3] {
        [self.length, self.width, self.height]
    }
}
