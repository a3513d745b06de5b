//! DataFrame helpers shared by the recoders.

use polars::prelude::*;
use ukhls_common::any_to_code;

use crate::error::{RecodeError, Result};

/// Look up a source column, mapping absence to [`RecodeError::ColumnNotFound`].
pub(crate) fn source_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| RecodeError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Build a series named `target` by mapping every survey code in `source`.
///
/// Cells that hold no code (nulls, strings, fractional floats) and codes the
/// mapping rejects both become null. Returns the series together with the
/// number of non-null values written.
pub(crate) fn map_codes<T, F>(
    df: &DataFrame,
    source: &str,
    target: &str,
    mapping: F,
) -> Result<(Series, usize)>
where
    F: Fn(i64) -> Option<T>,
    Series: NamedFrom<Vec<Option<T>>, [Option<T>]>,
{
    let source_series = source_column(df, source)?;
    let row_count = df.height();

    let mut values: Vec<Option<T>> = Vec::with_capacity(row_count);
    let mut mapped = 0;

    for idx in 0..row_count {
        let value = any_to_code(source_series.get(idx)?).and_then(&mapping);
        if value.is_some() {
            mapped += 1;
        }
        values.push(value);
    }

    Ok((Series::new(target.into(), values), mapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_column_missing() {
        let df = df! { "sex" => &[1i64, 2] }.unwrap();
        let err = source_column(&df, "jbstat").unwrap_err();
        assert!(matches!(err, RecodeError::ColumnNotFound { column } if column == "jbstat"));
    }

    #[test]
    fn test_map_codes_counts_mapped_rows() {
        let df = df! { "code" => &[Some(1i64), Some(2), None, Some(-9)] }.unwrap();
        let (series, mapped) =
            map_codes(&df, "code", "out", |code| (code > 0).then_some(code as i32 * 10)).unwrap();

        assert_eq!(mapped, 2);
        assert_eq!(series.name().as_str(), "out");
        let values: Vec<Option<i32>> = series.i32().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(10), Some(20), None, None]);
    }
}
