//! Socioeconomic codebooks: highest qualification, labour force status,
//! marital status.

use serde::{Deserialize, Serialize};

use crate::category::{Category, display_as_label};

/// Highest qualification (`hiqual_dv`), ordinal.
///
/// Variants are declared lowest first so the derived `Ord` gives
/// `Lower < Secondary < LtTertiary < Tertiary`. [`Category::ALL`] lists them
/// highest first, which is the order the labels are reported in.
///
/// | Codes | Category |
/// |-------|----------|
/// | 1, 2  | Tertiary (degree, other higher degree) |
/// | 3     | L/t tertiary (A level etc.) |
/// | 4     | Secondary (GCSE etc.) |
/// | 5, 9  | Lower (other qualification, no qualification) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "Lower")]
    Lower,
    #[serde(rename = "Secondary")]
    Secondary,
    #[serde(rename = "L/t tertiary")]
    LtTertiary,
    #[serde(rename = "Tertiary")]
    Tertiary,
}

impl Category for Education {
    const VARIABLE: &'static str = "hiqual_dv";
    const NAME: &'static str = "Highest qualification";
    const ALL: &'static [Self] = &[
        Education::Tertiary,
        Education::LtTertiary,
        Education::Secondary,
        Education::Lower,
    ];
    const ORDERED: bool = true;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 | 2 => Some(Education::Tertiary),
            3 => Some(Education::LtTertiary),
            4 => Some(Education::Secondary),
            5 | 9 => Some(Education::Lower),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Education::Tertiary => "Tertiary",
            Education::LtTertiary => "L/t tertiary",
            Education::Secondary => "Secondary",
            Education::Lower => "Lower",
        }
    }
}

/// Current labour force status (`jbstat`).
///
/// Leave of any kind, furlough, apprenticeships and short-time working all
/// count as employed. Government training schemes count as out of the labour
/// force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabourForceStatus {
    #[serde(rename = "Employed")]
    Employed,
    #[serde(rename = "Unemployed")]
    Unemployed,
    #[serde(rename = "Out of labour force")]
    OutOfLabourForce,
}

impl Category for LabourForceStatus {
    const VARIABLE: &'static str = "jbstat";
    const NAME: &'static str = "Labour force status";
    const ALL: &'static [Self] = &[
        LabourForceStatus::Employed,
        LabourForceStatus::Unemployed,
        LabourForceStatus::OutOfLabourForce,
    ];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            // self-employed, paid employment, maternity leave
            1 | 2 | 5 => Some(LabourForceStatus::Employed),
            // unpaid family business, apprenticeship, furlough, temporary
            // layoff, shared parental leave, adoption leave
            10..=15 => Some(LabourForceStatus::Employed),
            3 => Some(LabourForceStatus::Unemployed),
            // retired, family care, student, long-term sick, training scheme
            4 | 6..=9 => Some(LabourForceStatus::OutOfLabourForce),
            // something else
            97 => Some(LabourForceStatus::OutOfLabourForce),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LabourForceStatus::Employed => "Employed",
            LabourForceStatus::Unemployed => "Unemployed",
            LabourForceStatus::OutOfLabourForce => "Out of labour force",
        }
    }
}

/// Legal marital status (`mlstat`).
///
/// Civil partnerships are grouped with marriages, and every separated,
/// divorced, widowed or dissolved status becomes
/// [`MaritalStatus::PreviouslyMarried`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "Married")]
    Married,
    #[serde(rename = "Previously Married")]
    PreviouslyMarried,
    #[serde(rename = "Never married")]
    NeverMarried,
}

impl Category for MaritalStatus {
    const VARIABLE: &'static str = "mlstat";
    const NAME: &'static str = "Marital status";
    const ALL: &'static [Self] = &[
        MaritalStatus::Married,
        MaritalStatus::PreviouslyMarried,
        MaritalStatus::NeverMarried,
    ];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MaritalStatus::NeverMarried),
            2 | 3 => Some(MaritalStatus::Married),
            4..=9 => Some(MaritalStatus::PreviouslyMarried),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::PreviouslyMarried => "Previously Married",
            MaritalStatus::NeverMarried => "Never married",
        }
    }
}

display_as_label!(Education, LabourForceStatus, MaritalStatus);
