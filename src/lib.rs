//! Vacation Planner
//!
//! This crate tracks employee absences (vacation, sick leave, special leave)
//! and enforces a cap on how many employees may be on vacation on the same
//! business day.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod store;
