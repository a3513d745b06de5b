//! Column naming and run options for the recoders.

use serde::{Deserialize, Serialize};
use ukhls_model::{
    Category, Education, Ethnicity, LabourForceStatus, MaritalStatus, MigrantGeneration, Region,
    Sex,
};

/// Source column of the "born in the UK" flag.
pub const BORN_UK_COLUMN: &str = "bornuk_dv";

/// Name of the column written by [`create_immigrant_variable`](crate::create_immigrant_variable).
pub const IMMIGRANT_COLUMN: &str = "immigrant";

/// Suffix appended to the source name by the category-lookup recoders.
pub const RECODED_SUFFIX: &str = "_recoded";

/// Returns the name of the column a category-lookup recoder writes.
///
/// ```
/// use ukhls_recode::recoded_column_name;
///
/// assert_eq!(recoded_column_name("jbstat"), "jbstat_recoded");
/// ```
pub fn recoded_column_name(source: &str) -> String {
    format!("{source}{RECODED_SUFFIX}")
}

/// Source column names for each recoded survey variable.
///
/// Defaults to the Understanding Society derived-variable names. Extracts
/// with wave prefixes (`a_sex`, `b_sex`, ...) or renamed columns can override
/// any subset; missing keys keep their default when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyColumns {
    pub sex: String,
    pub ethnicity: String,
    pub migrant_generation: String,
    pub education: String,
    pub labour_force_status: String,
    pub marital_status: String,
    pub region: String,
    pub born_uk: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            sex: Sex::VARIABLE.to_string(),
            ethnicity: Ethnicity::VARIABLE.to_string(),
            migrant_generation: MigrantGeneration::VARIABLE.to_string(),
            education: Education::VARIABLE.to_string(),
            labour_force_status: LabourForceStatus::VARIABLE.to_string(),
            marital_status: MaritalStatus::VARIABLE.to_string(),
            region: Region::VARIABLE.to_string(),
            born_uk: BORN_UK_COLUMN.to_string(),
        }
    }
}

impl SurveyColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every column with a wave letter (`a_`, `b_`, ...).
    ///
    /// ```
    /// use ukhls_recode::SurveyColumns;
    ///
    /// let columns = SurveyColumns::new().for_wave('b');
    /// assert_eq!(columns.sex, "b_sex");
    /// assert_eq!(columns.education, "b_hiqual_dv");
    /// ```
    #[must_use]
    pub fn for_wave(self, wave: char) -> Self {
        let prefix = |name: String| format!("{wave}_{name}");
        Self {
            sex: prefix(self.sex),
            ethnicity: prefix(self.ethnicity),
            migrant_generation: prefix(self.migrant_generation),
            education: prefix(self.education),
            labour_force_status: prefix(self.labour_force_status),
            marital_status: prefix(self.marital_status),
            region: prefix(self.region),
            born_uk: prefix(self.born_uk),
        }
    }
}

/// Options for the table-wide passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecodeOptions {
    /// Draw a per-column progress bar on stderr.
    /// Default: false.
    pub show_progress: bool,
}

impl RecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns_use_survey_names() {
        let columns = SurveyColumns::default();
        assert_eq!(columns.sex, "sex");
        assert_eq!(columns.ethnicity, "ethn_dv");
        assert_eq!(columns.migrant_generation, "generation");
        assert_eq!(columns.education, "hiqual_dv");
        assert_eq!(columns.labour_force_status, "jbstat");
        assert_eq!(columns.marital_status, "mlstat");
        assert_eq!(columns.region, "gor_dv");
        assert_eq!(columns.born_uk, "bornuk_dv");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let columns: SurveyColumns = serde_json::from_str(r#"{"sex": "sex_w1"}"#).unwrap();
        assert_eq!(columns.sex, "sex_w1");
        assert_eq!(columns.region, "gor_dv");
        assert_eq!(columns.born_uk, "bornuk_dv");
    }

    #[test]
    fn test_options_builder() {
        assert!(!RecodeOptions::new().show_progress);
        assert!(RecodeOptions::new().with_progress(true).show_progress);
    }
}
