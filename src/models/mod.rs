//! Data models module
//!
//! Defines the date values a weekly report is built from.

pub mod date_info;

pub use date_info::{today_in, DateInfo};
