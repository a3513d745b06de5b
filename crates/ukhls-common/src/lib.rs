//! Shared utilities for the UKHLS recoding crates.

pub mod polars;

pub use polars::{any_to_code, is_numeric_dtype};
