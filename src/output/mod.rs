//! Report formatting and export
//!
//! Text goes to stdout, JSON and CSV go to files named on the command
//! line.

pub mod csv;
pub mod json;
pub mod plot;
pub mod text;
