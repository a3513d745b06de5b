//! Polars AnyValue utility functions.
//!
//! Survey extracts arrive with whatever dtype the reader picked for a
//! variable (Stata `byte` columns become `Int8`, SPSS numerics become
//! `Float64`, and so on). The helpers here read a survey code out of a cell
//! regardless of that choice.

use polars::prelude::*;

/// Reads a survey response code from a cell.
///
/// Integer cells are returned as-is. Float cells only count when they are
/// finite and integral, so `2.0` is code 2 while `2.5` and `NaN` are not codes.
/// Strings, booleans and every other type return `None`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use ukhls_common::any_to_code;
///
/// assert_eq!(any_to_code(AnyValue::Int32(97)), Some(97));
/// assert_eq!(any_to_code(AnyValue::Float64(2.0)), Some(2));
/// assert_eq!(any_to_code(AnyValue::Float64(2.5)), None);
/// assert_eq!(any_to_code(AnyValue::String("2")), None);
/// assert_eq!(any_to_code(AnyValue::Null), None);
/// ```
pub fn any_to_code(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => integral_code(f64::from(v)),
        AnyValue::Float64(v) => integral_code(v),
        _ => None,
    }
}

fn integral_code(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Returns true for the integer and float dtypes that can hold sentinel codes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
