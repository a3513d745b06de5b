//! Geographic codebooks.

use serde::{Deserialize, Serialize};

use crate::category::{Category, display_as_label};

/// Government office region (`gor_dv`), codes 1-12 in survey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North East")]
    NorthEast,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Yorkshire and the Humber")]
    YorkshireAndTheHumber,
    #[serde(rename = "East Midlands")]
    EastMidlands,
    #[serde(rename = "West Midlands")]
    WestMidlands,
    #[serde(rename = "East of England")]
    EastOfEngland,
    #[serde(rename = "London")]
    London,
    #[serde(rename = "South East")]
    SouthEast,
    #[serde(rename = "South West")]
    SouthWest,
    #[serde(rename = "Wales")]
    Wales,
    #[serde(rename = "Scotland")]
    Scotland,
    #[serde(rename = "Northern Ireland")]
    NorthernIreland,
}

impl Category for Region {
    const VARIABLE: &'static str = "gor_dv";
    const NAME: &'static str = "Government office region";
    const ALL: &'static [Self] = &[
        Region::NorthEast,
        Region::NorthWest,
        Region::YorkshireAndTheHumber,
        Region::EastMidlands,
        Region::WestMidlands,
        Region::EastOfEngland,
        Region::London,
        Region::SouthEast,
        Region::SouthWest,
        Region::Wales,
        Region::Scotland,
        Region::NorthernIreland,
    ];

    fn from_code(code: i64) -> Option<Self> {
        let index = usize::try_from(code).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Region::NorthEast => "North East",
            Region::NorthWest => "North West",
            Region::YorkshireAndTheHumber => "Yorkshire and the Humber",
            Region::EastMidlands => "East Midlands",
            Region::WestMidlands => "West Midlands",
            Region::EastOfEngland => "East of England",
            Region::London => "London",
            Region::SouthEast => "South East",
            Region::SouthWest => "South West",
            Region::Wales => "Wales",
            Region::Scotland => "Scotland",
            Region::NorthernIreland => "Northern Ireland",
        }
    }
}

display_as_label!(Region);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_codes_follow_declared_order() {
        assert_eq!(Region::from_code(1), Some(Region::NorthEast));
        assert_eq!(Region::from_code(7), Some(Region::London));
        assert_eq!(Region::from_code(12), Some(Region::NorthernIreland));
    }

    #[test]
    fn test_region_out_of_range() {
        assert_eq!(Region::from_code(0), None);
        assert_eq!(Region::from_code(13), None);
        assert_eq!(Region::from_code(-9), None);
    }
}
