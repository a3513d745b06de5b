//! Recoders for two-valued survey items.

use polars::prelude::*;
use ukhls_model::{Category, Sex};

use crate::error::Result;
use crate::frame::map_codes;
use crate::options::IMMIGRANT_COLUMN;

/// Replace a sex column (1 = male, 2 = female) with `"Male"`/`"Female"` labels.
///
/// The column keeps its name and becomes a string column. Any other value,
/// null included, becomes null. Returns the number of rows labeled.
pub fn recode_binary_sex_column(df: &mut DataFrame, column: &str) -> Result<usize> {
    let (series, recoded) = map_codes(df, column, column, Sex::label_for_code)?;
    df.with_column(series)?;

    tracing::debug!(column = %column, recoded, rows = df.height(), "Recoded sex column");
    Ok(recoded)
}

/// Recode yes/no items from the survey's 1 = yes / 2 = no convention to 1/0.
///
/// Each column is replaced in place by an `Int32` column: 1 stays 1, 2
/// becomes 0, everything else becomes null. Columns are processed in order;
/// if one is missing the error is returned and columns before it stay
/// recoded. Returns the number of non-null values written across all columns.
pub fn recode_binary_variables<S: AsRef<str>>(df: &mut DataFrame, variables: &[S]) -> Result<usize> {
    let mut total = 0;

    for variable in variables {
        let name = variable.as_ref();
        let (series, recoded) = map_codes(df, name, name, yes_no_indicator)?;
        df.with_column(series)?;

        tracing::debug!(column = %name, recoded, "Recoded binary variable");
        total += recoded;
    }

    Ok(total)
}

fn yes_no_indicator(code: i64) -> Option<i32> {
    match code {
        1 => Some(1),
        2 => Some(0),
        _ => None,
    }
}

/// Derive `immigrant` from a born-in-the-UK flag (1 = born in the UK, 0 = not).
///
/// `immigrant` is 0 when the flag is 1, 1 when the flag is 0, and null
/// otherwise. The flag column is kept. Returns the number of rows with a
/// non-null indicator.
pub fn create_immigrant_variable(df: &mut DataFrame, column: &str) -> Result<usize> {
    let (series, derived) = map_codes(df, column, IMMIGRANT_COLUMN, invert_flag)?;
    df.with_column(series)?;

    tracing::debug!(
        column = %column,
        target = IMMIGRANT_COLUMN,
        derived,
        rows = df.height(),
        "Derived immigrant indicator"
    );
    Ok(derived)
}

fn invert_flag(code: i64) -> Option<i32> {
    match code {
        1 => Some(0),
        0 => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_indicator() {
        assert_eq!(yes_no_indicator(1), Some(1));
        assert_eq!(yes_no_indicator(2), Some(0));
        assert_eq!(yes_no_indicator(0), None);
        assert_eq!(yes_no_indicator(3), None);
        assert_eq!(yes_no_indicator(-9), None);
    }

    #[test]
    fn test_invert_flag() {
        assert_eq!(invert_flag(1), Some(0));
        assert_eq!(invert_flag(0), Some(1));
        assert_eq!(invert_flag(2), None);
        assert_eq!(invert_flag(-1), None);
    }

    #[test]
    fn test_sex_column_keeps_name_and_position() {
        let mut df = df! {
            "pidp" => &[10i64, 11],
            "sex" => &[2i64, 1],
        }
        .unwrap();

        recode_binary_sex_column(&mut df, "sex").unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["pidp", "sex"]);
        assert_eq!(df.column("sex").unwrap().dtype(), &DataType::String);
    }
}
