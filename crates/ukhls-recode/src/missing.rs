//! Table-wide recoding of negative sentinel codes to missing.
//!
//! Understanding Society stores non-substantive answers as negative codes
//! (-1 don't know, -2 refused, -8 inapplicable, -9 missing, ...). This pass
//! turns every negative value in every numeric column into null so the
//! codes cannot leak into means or category lookups.

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use serde::Serialize;
use ukhls_common::is_numeric_dtype;

use crate::options::RecodeOptions;

/// A column the negative-code pass could not recode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnFailure {
    pub column: String,
    pub message: String,
}

/// Summary of a [`recode_negative_as_missing`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NegativeRecodeReport {
    /// Numeric columns visited, failed ones included.
    pub columns_scanned: usize,
    /// Non-numeric columns left untouched.
    pub columns_skipped: usize,
    /// Negative values turned into nulls across all columns.
    pub values_recoded: usize,
    /// Columns left unchanged because recoding them failed.
    pub failures: Vec<ColumnFailure>,
}

impl NegativeRecodeReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Replace every negative value in every numeric column with null.
///
/// Nulls stay null, NaN is kept, non-numeric columns and column dtypes are
/// left as they are. A column that fails to recode is logged, recorded in the
/// report and left unchanged; the pass always continues with the next column
/// and never returns an error.
pub fn recode_negative_as_missing(
    df: &mut DataFrame,
    options: &RecodeOptions,
) -> NegativeRecodeReport {
    sweep_numeric_columns(df, options, negative_to_null)
}

/// Null out the negative values of a single numeric column.
///
/// Works on the series itself, so the column name is never resolved as an
/// expression pattern.
fn negative_to_null(column: &Column) -> PolarsResult<Column> {
    let series = column.as_materialized_series();
    let negative = series.lt(0i32)?;
    let missing = Series::full_null(series.name().clone(), series.len(), series.dtype());

    Ok(Column::from(missing.zip_with(&negative, series)?))
}

fn sweep_numeric_columns<F>(
    df: &mut DataFrame,
    options: &RecodeOptions,
    recode: F,
) -> NegativeRecodeReport
where
    F: Fn(&Column) -> PolarsResult<Column>,
{
    let names = df.get_column_names_owned();
    let progress = column_progress(names.len(), options);
    let mut report = NegativeRecodeReport::default();

    for name in &names {
        progress.set_message(name.to_string());

        match recode_column(df, name.as_str(), &recode) {
            Ok(None) => report.columns_skipped += 1,
            Ok(Some(count)) => {
                report.columns_scanned += 1;
                report.values_recoded += count;
            }
            Err(err) => {
                tracing::warn!(
                    column = %name,
                    error = %err,
                    "Failed to recode negative values, leaving column unchanged"
                );
                report.columns_scanned += 1;
                report.failures.push(ColumnFailure {
                    column: name.to_string(),
                    message: err.to_string(),
                });
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    tracing::info!(
        scanned = report.columns_scanned,
        skipped = report.columns_skipped,
        recoded = report.values_recoded,
        failed = report.failures.len(),
        "Recoded negative codes as missing"
    );

    report
}

/// Returns `None` for non-numeric columns, otherwise the number of values nulled.
fn recode_column<F>(df: &mut DataFrame, name: &str, recode: &F) -> PolarsResult<Option<usize>>
where
    F: Fn(&Column) -> PolarsResult<Column>,
{
    let column = df.column(name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Ok(None);
    }

    let nulls_before = column.null_count();
    let recoded = recode(column)?;
    let count = recoded.null_count().saturating_sub(nulls_before);

    df.with_column(recoded)?;
    tracing::debug!(column = %name, recoded = count, "Recoded negative codes");

    Ok(Some(count))
}

fn column_progress(len: usize, options: &RecodeOptions) -> ProgressBar {
    if !options.show_progress {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(u64::try_from(len).unwrap_or(u64::MAX));
    if let Ok(style) =
        ProgressStyle::with_template("{prefix} [{bar:40}] column {pos} of {len}: {msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_prefix("Recoding negative codes");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn failing_on(bad: &'static str) -> impl Fn(&Column) -> PolarsResult<Column> {
        move |column: &Column| {
            if column.name().as_str() == bad {
                Err(PolarsError::ComputeError("unsupported operation".into()))
            } else {
                negative_to_null(column)
            }
        }
    }

    #[test]
    fn test_negative_to_null_keeps_dtype() {
        let column = Column::new("jbstat".into(), &[Some(3i32), Some(-8), None, Some(0)]);
        let recoded = negative_to_null(&column).unwrap();

        assert_eq!(recoded.dtype(), &DataType::Int32);
        let values: Vec<Option<i32>> = recoded.i32().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(3), None, None, Some(0)]);
    }

    #[test]
    fn test_failing_column_is_left_unchanged() {
        let mut df = df! {
            "age" => &[34i64, -9, 51],
            "bad" => &[-1i64, -2, 3],
            "sex" => &[1i64, -7, 2],
        }
        .unwrap();

        let report = sweep_numeric_columns(&mut df, &RecodeOptions::new(), failing_on("bad"));

        assert_eq!(report.columns_scanned, 3);
        assert_eq!(report.values_recoded, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].column, "bad");
        assert!(report.failures[0].message.contains("unsupported operation"));

        let bad: Vec<Option<i64>> = df.column("bad").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(bad, vec![Some(-1), Some(-2), Some(3)]);
        let sex: Vec<Option<i64>> = df.column("sex").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(sex, vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_failure_is_logged_with_column_name() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let buffer = Arc::clone(&buffer);
            move || CaptureWriter(Arc::clone(&buffer))
        };
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();

        let mut df = df! { "bad" => &[-1i64, 2] }.unwrap();
        let report = tracing::subscriber::with_default(subscriber, || {
            sweep_numeric_columns(&mut df, &RecodeOptions::new(), failing_on("bad"))
        });

        assert!(report.has_failures());
        let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("column=bad"));
        assert!(logs.contains("leaving column unchanged"));
    }

    #[test]
    fn test_hidden_progress_when_disabled() {
        let bar = column_progress(10, &RecodeOptions::new());
        assert!(bar.is_hidden());
    }
}
