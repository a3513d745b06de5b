//! The codebook trait shared by every recoded variable.

use std::fmt;

/// A fixed set of analysis categories for one survey variable.
///
/// Implementors are plain enums. The code table lives in [`from_code`]; any
/// code it does not list (including the negative sentinel codes) has no
/// category and is treated as missing by the recoders.
///
/// [`from_code`]: Category::from_code
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Raw survey variable name (e.g. `hiqual_dv`).
    const VARIABLE: &'static str;

    /// Human-readable name of the codebook (e.g. "Highest qualification").
    const NAME: &'static str;

    /// Every category, in declared order.
    const ALL: &'static [Self];

    /// Whether the declared order is a rank.
    const ORDERED: bool = false;

    /// Looks up the category for a raw survey code.
    fn from_code(code: i64) -> Option<Self>;

    /// Label written into recoded columns.
    fn label(self) -> &'static str;

    /// Declared labels in order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().copied().map(Self::label).collect()
    }

    /// Reverse lookup of a label produced by [`Category::label`].
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.label() == label)
    }

    /// Label for a raw code, or `None` when the code is unmapped.
    fn label_for_code(code: i64) -> Option<&'static str> {
        Self::from_code(code).map(Self::label)
    }
}

/// Implements `Display` as the category label.
macro_rules! display_as_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::Category::label(*self))
                }
            }
        )+
    };
}

pub(crate) use display_as_label;
