//! Command-line interface module
//!
//! Implements the two modes of the `goweek` command:
//! - gen: fill the template, write this week's report and open it
//! - commit: add, commit and push the reports repository
pub mod commit;
pub mod gen;
