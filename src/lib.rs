//! Labour Payment Engine
//!
//! This crate pairs work contracts with attendance records to compute pay,
//! and merges employees, contracts, attendance and payments into a single
//! fixed-width payment report. Records are correlated by position only.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
