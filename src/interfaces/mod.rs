//! Input and output boundaries of the checker.

pub mod csv;
pub mod report;
