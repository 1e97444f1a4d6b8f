//! Options that adjust how Hebrew dates are resolved and named.

use core::{fmt, str::FromStr};

/// How the two Adar months of a leap year are named.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AdarNaming {
    /// "Adar A" and "Adar B"
    #[default]
    Letters,
    /// "Adar I" and "Adar II"
    Numerals,
}

/// A parsing error for `AdarNaming`
#[derive(Debug, Clone, Copy)]
pub struct ParseAdarNamingError;

impl fmt::Display for ParseAdarNamingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid Adar naming value")
    }
}

impl core::error::Error for ParseAdarNamingError {}

impl FromStr for AdarNaming {
    type Err = ParseAdarNamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "letters" => Ok(Self::Letters),
            "numerals" => Ok(Self::Numerals),
            _ => Err(ParseAdarNamingError),
        }
    }
}

impl fmt::Display for AdarNaming {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Letters => "letters",
            Self::Numerals => "numerals",
        })
    }
}

/// `ImpreciseDatePreference` chooses a single day for a Hebrew date that is
/// missing its day, or its day and month.
///
/// A partial date spans a range of days. The preference picks the day from
/// that range that stands in for the whole.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ImpreciseDatePreference {
    /// The first day of the range, the same as `FavorEarliest`.
    #[default]
    Precise,
    /// The first day of the range.
    FavorEarliest,
    /// The last day of the range.
    FavorLatest,
    /// A day in the middle of the range.
    FavorMidpoint,
}

/// A parsing error for `ImpreciseDatePreference`
#[derive(Debug, Clone, Copy)]
pub struct ParseImpreciseDatePreferenceError;

impl fmt::Display for ParseImpreciseDatePreferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid imprecise date preference")
    }
}

impl core::error::Error for ParseImpreciseDatePreferenceError {}

impl FromStr for ImpreciseDatePreference {
    type Err = ParseImpreciseDatePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precise" => Ok(Self::Precise),
            "earliest" => Ok(Self::FavorEarliest),
            "latest" => Ok(Self::FavorLatest),
            "midpoint" => Ok(Self::FavorMidpoint),
            _ => Err(ParseImpreciseDatePreferenceError),
        }
    }
}

impl fmt::Display for ImpreciseDatePreference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Precise => "precise",
            Self::FavorEarliest => "earliest",
            Self::FavorLatest => "latest",
            Self::FavorMidpoint => "midpoint",
        })
    }
}
