//! Application layer orchestrating the rule engine.
//!
//! `BaggageChecker` runs each bag through the rules and threads the running
//! summary from one bag to the next.

pub mod checker;
