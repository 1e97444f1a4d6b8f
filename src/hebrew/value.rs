//! GEDCOM Hebrew date values: qualified dates, interpreted dates, ranges
//! and periods.

use alloc::string::String;
use core::{fmt, str::FromStr};

use super::{HebrewDate, PartialHebrewDate};
use crate::{options::ImpreciseDatePreference, parsers, GregorianDate, LuachError, LuachResult};

/// The keyword in front of a single GEDCOM date.
///
/// A qualifier describes the date but does not move it: `BEF 5776` resolves
/// exactly like `5776`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQualifier {
    /// `ABT`, also written `ABOUT`, `APPX` or `APPROX`.
    About,
    /// `CAL`, also written `CALC`.
    Calculated,
    /// `EST`
    Estimated,
    /// `BEF`, also written `BEFORE`.
    Before,
    /// `AFT`, also written `AFTER`.
    After,
    /// `FROM` without a closing `TO`.
    From,
    /// `TO` without an opening `FROM`.
    To,
}

impl DateQualifier {
    /// Looks up a qualifier keyword, ignoring ASCII case and a trailing
    /// period.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        const KEYWORDS: [(&str, DateQualifier); 13] = [
            ("ABT", DateQualifier::About),
            ("ABOUT", DateQualifier::About),
            ("APPX", DateQualifier::About),
            ("APPROX", DateQualifier::About),
            ("CAL", DateQualifier::Calculated),
            ("CALC", DateQualifier::Calculated),
            ("EST", DateQualifier::Estimated),
            ("BEF", DateQualifier::Before),
            ("BEFORE", DateQualifier::Before),
            ("AFT", DateQualifier::After),
            ("AFTER", DateQualifier::After),
            ("FROM", DateQualifier::From),
            ("TO", DateQualifier::To),
        ];

        let keyword = keyword.strip_suffix('.').unwrap_or(keyword);
        KEYWORDS
            .into_iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(keyword))
            .map(|(_, qualifier)| qualifier)
    }

    /// Returns the GEDCOM keyword for the qualifier.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::About => "ABT",
            Self::Calculated => "CAL",
            Self::Estimated => "EST",
            Self::Before => "BEF",
            Self::After => "AFT",
            Self::From => "FROM",
            Self::To => "TO",
        }
    }
}

impl fmt::Display for DateQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Whether a two date value is a range (`BET .. AND ..`) or a period
/// (`FROM .. TO ..`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Between,
    Period,
}

/// Two Hebrew dates bounding an event.
///
/// ```rust
/// use luach_rs::{options::ImpreciseDatePreference, HebrewDateValue};
///
/// let value: HebrewDateValue = "FROM 5776 TO 5777".parse().unwrap();
/// let midpoint = value.to_gregorian(ImpreciseDatePreference::FavorMidpoint).unwrap();
/// assert_eq!(midpoint.to_string(), "2016-09-16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDateRange {
    kind: RangeKind,
    start: PartialHebrewDate,
    end: PartialHebrewDate,
}

impl HebrewDateRange {
    #[must_use]
    pub const fn new(kind: RangeKind, start: PartialHebrewDate, end: PartialHebrewDate) -> Self {
        Self { kind, start, end }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> RangeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> PartialHebrewDate {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> PartialHebrewDate {
        self.end
    }

    /// Picks a single Gregorian date from the range according to
    /// `preference`.
    ///
    /// The earliest date is the earliest reading of the start, the latest
    /// date is the latest reading of the end, and the midpoint lies halfway
    /// between those two, rounded toward the start. `Precise` reads the start
    /// precisely.
    pub fn to_gregorian(&self, preference: ImpreciseDatePreference) -> LuachResult<GregorianDate> {
        use ImpreciseDatePreference::*;

        match preference {
            Precise | FavorEarliest => self.start.to_gregorian(preference),
            FavorLatest => self.end.to_gregorian(preference),
            FavorMidpoint => {
                let start = self.start.to_gregorian(FavorEarliest)?;
                let end = self.end.to_gregorian(FavorLatest)?;
                start.add_days(start.days_until(&end) / 2)
            }
        }
    }

    /// Picks a single Hebrew date from the range according to `preference`.
    pub fn resolve(&self, preference: ImpreciseDatePreference) -> LuachResult<HebrewDate> {
        self.to_gregorian(preference)?.to_hebrew()
    }
}

impl fmt::Display for HebrewDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RangeKind::Between => write!(f, "BET {} AND {}", self.start, self.end),
            RangeKind::Period => write!(f, "FROM {} TO {}", self.start, self.end),
        }
    }
}

/// A Hebrew date as it appears in a GEDCOM `DATE` line.
///
/// ```rust
/// use luach_rs::{options::ImpreciseDatePreference, HebrewDateValue};
///
/// let value: HebrewDateValue = "@#DHEBREW@ ABT TMZ 5776".parse().unwrap();
/// let latest = value.to_gregorian(ImpreciseDatePreference::FavorLatest).unwrap();
/// assert_eq!(latest.to_string(), "2016-08-04");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HebrewDateValue {
    /// A date with no keyword.
    Date(PartialHebrewDate),
    /// A date following a qualifier keyword such as `ABT`.
    Qualified(DateQualifier, PartialHebrewDate),
    /// `INT <date> (<phrase>)`
    Interpreted {
        date: PartialHebrewDate,
        phrase: String,
    },
    /// `BET <date> AND <date>` or `FROM <date> TO <date>`.
    Range(HebrewDateRange),
}

impl HebrewDateValue {
    /// Picks a single Gregorian date according to `preference`.
    pub fn to_gregorian(&self, preference: ImpreciseDatePreference) -> LuachResult<GregorianDate> {
        match self {
            Self::Date(date) | Self::Qualified(_, date) | Self::Interpreted { date, .. } => {
                date.to_gregorian(preference)
            }
            Self::Range(range) => range.to_gregorian(preference),
        }
    }

    /// Picks a single Hebrew date according to `preference`.
    pub fn resolve(&self, preference: ImpreciseDatePreference) -> LuachResult<HebrewDate> {
        match self {
            Self::Date(date) | Self::Qualified(_, date) | Self::Interpreted { date, .. } => {
                date.resolve(preference)
            }
            Self::Range(range) => range.resolve(preference),
        }
    }
}

impl From<PartialHebrewDate> for HebrewDateValue {
    fn from(date: PartialHebrewDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for HebrewDateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => fmt::Display::fmt(date, f),
            Self::Qualified(qualifier, date) => write!(f, "{qualifier} {date}"),
            Self::Interpreted { date, phrase } => write!(f, "INT {date} ({phrase})"),
            Self::Range(range) => fmt::Display::fmt(range, f),
        }
    }
}

impl FromStr for HebrewDateValue {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_gedcom_hebrew_value(s)
    }
}
