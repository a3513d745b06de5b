//! Demographic codebooks: sex, ethnic group, migrant generation.

use serde::{Deserialize, Serialize};

use crate::category::{Category, display_as_label};

/// Respondent sex (`sex`).
///
/// | Code | Category |
/// |------|----------|
/// | 1    | Male     |
/// | 2    | Female   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Category for Sex {
    const VARIABLE: &'static str = "sex";
    const NAME: &'static str = "Sex";
    const ALL: &'static [Self] = &[Sex::Male, Sex::Female];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Sex::Male),
            2 => Some(Sex::Female),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Ethnic group (`ethn_dv`), collapsed to the five UK Census groups.
///
/// The eighteen detailed survey groups map as follows:
///
/// | Codes      | Category |
/// |------------|----------|
/// | 1-4        | White |
/// | 5-8        | Mixed or Multiple |
/// | 9-13       | Asian or Asian British |
/// | 14-16      | Black, Black British, Caribbean or African |
/// | 17, 97     | Other ethnic group |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ethnicity {
    #[serde(rename = "White")]
    White,
    #[serde(rename = "Mixed or Multiple")]
    Mixed,
    #[serde(rename = "Asian or Asian British")]
    Asian,
    #[serde(rename = "Black, Black British, Caribbean or African")]
    Black,
    #[serde(rename = "Other ethnic group")]
    Other,
}

impl Category for Ethnicity {
    const VARIABLE: &'static str = "ethn_dv";
    const NAME: &'static str = "Ethnic group";
    const ALL: &'static [Self] = &[
        Ethnicity::White,
        Ethnicity::Mixed,
        Ethnicity::Asian,
        Ethnicity::Black,
        Ethnicity::Other,
    ];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1..=4 => Some(Ethnicity::White),
            5..=8 => Some(Ethnicity::Mixed),
            9..=13 => Some(Ethnicity::Asian),
            14..=16 => Some(Ethnicity::Black),
            17 | 97 => Some(Ethnicity::Other),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Ethnicity::White => "White",
            Ethnicity::Mixed => "Mixed or Multiple",
            Ethnicity::Asian => "Asian or Asian British",
            Ethnicity::Black => "Black, Black British, Caribbean or African",
            Ethnicity::Other => "Other ethnic group",
        }
    }
}

/// Migrant generation (`generation`).
///
/// Codes 5 and 6 are both folded into [`MigrantGeneration::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MigrantGeneration {
    #[serde(rename = "1st generation")]
    First,
    #[serde(rename = "2nd generation")]
    Second,
    #[serde(rename = "3rd generation")]
    Third,
    #[serde(rename = "4+ generation")]
    FourthOrLater,
    #[serde(rename = "Other")]
    Other,
}

impl Category for MigrantGeneration {
    const VARIABLE: &'static str = "generation";
    const NAME: &'static str = "Migrant generation";
    const ALL: &'static [Self] = &[
        MigrantGeneration::First,
        MigrantGeneration::Second,
        MigrantGeneration::Third,
        MigrantGeneration::FourthOrLater,
        MigrantGeneration::Other,
    ];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MigrantGeneration::First),
            2 => Some(MigrantGeneration::Second),
            3 => Some(MigrantGeneration::Third),
            4 => Some(MigrantGeneration::FourthOrLater),
            5 | 6 => Some(MigrantGeneration::Other),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MigrantGeneration::First => "1st generation",
            MigrantGeneration::Second => "2nd generation",
            MigrantGeneration::Third => "3rd generation",
            MigrantGeneration::FourthOrLater => "4+ generation",
            MigrantGeneration::Other => "Other",
        }
    }
}

display_as_label!(Sex, Ethnicity, MigrantGeneration);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethnicity_group_boundaries() {
        assert_eq!(Ethnicity::from_code(4), Some(Ethnicity::White));
        assert_eq!(Ethnicity::from_code(5), Some(Ethnicity::Mixed));
        assert_eq!(Ethnicity::from_code(13), Some(Ethnicity::Asian));
        assert_eq!(Ethnicity::from_code(14), Some(Ethnicity::Black));
        assert_eq!(Ethnicity::from_code(17), Some(Ethnicity::Other));
        assert_eq!(Ethnicity::from_code(18), None);
        assert_eq!(Ethnicity::from_code(0), None);
    }

    #[test]
    fn test_migrant_generation_other_codes() {
        assert_eq!(MigrantGeneration::label_for_code(5), Some("Other"));
        assert_eq!(MigrantGeneration::label_for_code(6), Some("Other"));
        assert_eq!(MigrantGeneration::label_for_code(7), None);
    }

    #[test]
    fn test_sex_serializes_as_label() {
        let json = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(json, "\"Female\"");
        let parsed: Ethnicity = serde_json::from_str("\"Mixed or Multiple\"").unwrap();
        assert_eq!(parsed, Ethnicity::Mixed);
    }
}
