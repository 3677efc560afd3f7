//! Utility functions

pub mod datetime;
