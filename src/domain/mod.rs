//! Domain layer: the baggage record, the airline rules, and running totals.
//!
//! Nothing in here performs I/O or can fail.

pub mod baggage;
pub mod rules;
pub mod summary;
