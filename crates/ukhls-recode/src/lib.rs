//! Survey recoding for Understanding Society (UKHLS) extracts.
//!
//! Turns raw questionnaire columns into analysis-ready variables. Every
//! recoder is an independent function over a Polars [`DataFrame`]: it reads
//! one or more named source columns and replaces them or adds new ones.
//!
//! # Overview
//!
//! - **Missing values**: [`recode_negative_as_missing`] nulls every negative
//!   sentinel code in every numeric column
//! - **Two-valued items**: [`recode_binary_sex_column`],
//!   [`recode_binary_variables`], [`create_immigrant_variable`]
//! - **Category lookups**: ethnicity, migrant generation, education, labour
//!   force status, marital status and region, all written to
//!   `<source>_recoded` via [`recode_category`] as a Polars `Enum` of the
//!   codebook's labels
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use ukhls_recode::{recode_binary_sex_column, recode_education, recode_negative_as_missing,
//!     RecodeOptions, SurveyColumns};
//!
//! let mut df = df! {
//!     "sex" => &[1i64, 2, -9],
//!     "hiqual_dv" => &[1i64, 4, -8],
//! }?;
//! let columns = SurveyColumns::default();
//!
//! let report = recode_negative_as_missing(&mut df, &RecodeOptions::default());
//! assert_eq!(report.values_recoded, 2);
//!
//! recode_binary_sex_column(&mut df, &columns.sex)?;
//! recode_education(&mut df, &columns.education)?;
//!
//! let education = df.column("hiqual_dv_recoded")?.cast(&DataType::String)?;
//! let education = education.str()?;
//! assert_eq!(education.get(0), Some("Tertiary"));
//! assert_eq!(education.get(2), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design Principles
//!
//! - **Unmapped means missing**: unexpected codes become null, never errors
//! - **Missing in, missing out**: no recoder turns a null into a value
//! - **Structural errors propagate**: a missing source column is a
//!   [`RecodeError`]; only the negative-code pass contains per-column failures

mod binary;
mod categorical;
mod error;
mod frame;
mod missing;
mod options;

// Error type
pub use error::{RecodeError, Result};

// Configuration
pub use options::{
    BORN_UK_COLUMN, IMMIGRANT_COLUMN, RECODED_SUFFIX, RecodeOptions, SurveyColumns,
    recoded_column_name,
};

// Missing values
pub use missing::{ColumnFailure, NegativeRecodeReport, recode_negative_as_missing};

// Two-valued items
pub use binary::{create_immigrant_variable, recode_binary_sex_column, recode_binary_variables};

// Category lookups
pub use categorical::{
    category_dtype, recode_category, recode_education, recode_ethnicity, recode_labour_force_status,
    recode_marital_status, recode_migrant_generation, recode_region,
};

// Codebooks, so callers can inspect declared categories without a second dependency
pub use ukhls_model::{
    Category, Education, Ethnicity, LabourForceStatus, MaritalStatus, MigrantGeneration, Region,
    Sex,
};
