//! Codebooks for recoded Understanding Society (UKHLS) variables.
//!
//! Each recoded survey variable has one enum whose variants are the analysis
//! categories. The [`Category`] trait ties the pieces of a codebook together:
//!
//! - the raw survey variable it applies to ([`Category::VARIABLE`]),
//! - the code → category table ([`Category::from_code`]),
//! - the declared label domain in order ([`Category::ALL`]),
//! - whether that order is a rank ([`Category::ORDERED`]).
//!
//! # Module Organization
//!
//! - [`category`]: the [`Category`] trait
//! - [`demographics`]: sex, ethnic group, migrant generation
//! - [`socioeconomic`]: highest qualification, labour force status, marital status
//! - [`geography`]: government office region
//!
//! # Example
//!
//! ```
//! use ukhls_model::{Category, Education};
//!
//! assert_eq!(Education::from_code(3), Some(Education::LtTertiary));
//! assert_eq!(Education::label_for_code(9), Some("Lower"));
//! assert_eq!(Education::label_for_code(-8), None);
//! assert!(Education::Tertiary > Education::Secondary);
//! ```

pub mod category;
pub mod demographics;
pub mod geography;
pub mod socioeconomic;

pub use category::Category;
pub use demographics::{Ethnicity, MigrantGeneration, Sex};
pub use geography::Region;
pub use socioeconomic::{Education, LabourForceStatus, MaritalStatus};
