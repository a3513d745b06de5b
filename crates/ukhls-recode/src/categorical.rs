//! Category-lookup recoders.
//!
//! Every recoder here is [`recode_category`] specialised to one codebook: it
//! reads survey codes from a source column and writes the matching labels to
//! `<source>_recoded`. Codes the codebook does not list become null.
//!
//! The recoded column is a Polars `Enum` whose categories are the codebook's
//! labels in declared order, so sorting and comparisons on the table follow
//! the codebook rather than the alphabet.

use polars::prelude::*;
use ukhls_model::{
    Category, Education, Ethnicity, LabourForceStatus, MaritalStatus, MigrantGeneration, Region,
};

use crate::error::Result;
use crate::frame::map_codes;
use crate::options::recoded_column_name;

/// The `Enum` dtype holding exactly the labels of codebook `C`, in
/// [`Category::ALL`] order.
pub fn category_dtype<C: Category>() -> Result<DataType> {
    let categories = FrozenCategories::new(C::labels())?;
    Ok(DataType::from_frozen_categories(categories))
}

/// Recode `source` through codebook `C` into a new `<source>_recoded` column.
///
/// The source column is kept. The new column has the [`category_dtype`] of
/// `C`. Returns the number of rows that received a label.
///
/// # Errors
///
/// Returns [`RecodeError::ColumnNotFound`](crate::RecodeError::ColumnNotFound)
/// when `source` is absent.
pub fn recode_category<C: Category>(df: &mut DataFrame, source: &str) -> Result<usize> {
    let target = recoded_column_name(source);
    let (labels, recoded) = map_codes(df, source, &target, C::label_for_code)?;
    df.with_column(labels.strict_cast(&category_dtype::<C>()?)?)?;

    tracing::debug!(
        codebook = C::NAME,
        column = %source,
        target = %target,
        recoded,
        rows = df.height(),
        "Recoded categorical column"
    );

    Ok(recoded)
}

/// Ethnic group (`ethn_dv`) into the five UK Census groups.
pub fn recode_ethnicity(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<Ethnicity>(df, column)
}

/// Migrant generation (`generation`).
pub fn recode_migrant_generation(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<MigrantGeneration>(df, column)
}

/// Highest qualification (`hiqual_dv`), ordinal: see [`Education`].
pub fn recode_education(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<Education>(df, column)
}

/// Labour force status (`jbstat`).
pub fn recode_labour_force_status(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<LabourForceStatus>(df, column)
}

/// Legal marital status (`mlstat`).
pub fn recode_marital_status(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<MaritalStatus>(df, column)
}

/// Government office region (`gor_dv`).
pub fn recode_region(df: &mut DataFrame, column: &str) -> Result<usize> {
    recode_category::<Region>(df, column)
}
