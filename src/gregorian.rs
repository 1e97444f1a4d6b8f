//! This module implements `GregorianDate`, the proleptic Gregorian side of
//! every conversion.

use alloc::string::String;
use core::{fmt, str::FromStr};

use date_equations::gregorian;
use writeable::Writeable;

use crate::{
    error::ErrorMessage,
    hebrew::HebrewDate,
    parsers::{self, FormattableIsoDate},
    LuachError, LuachResult,
};

/// The largest distance in days from 1970-01-01 a `GregorianDate` may lie.
pub const MAX_EPOCH_DAYS: i32 = 100_000_001;

// Years that can contain a date within `MAX_EPOCH_DAYS`.
const MIN_GREGORIAN_YEAR: i32 = -271_821;
const MAX_GREGORIAN_YEAR: i32 = 275_760;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for a number of days since 1970-01-01.
    #[must_use]
    pub fn from_epoch_days(epoch_days: i32) -> Self {
        Self::ALL[usize::from(gregorian::weekday_from_epoch_days(epoch_days))]
    }

    /// Returns the weekday for the Hebrew calendar day number, where Sunday
    /// is 1 and Saturday is 0.
    #[must_use]
    pub fn from_hebrew_day_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Self::Saturday),
            1..=6 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Returns the Hebrew calendar day number: Sunday is 1, Friday is 6 and
    /// Saturday is 0.
    #[must_use]
    pub fn hebrew_day_number(self) -> u8 {
        (self as u8 + 1) % 7
    }

    /// Returns the three letter abbreviation, e.g. "Wed".
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Returns the full English name, e.g. "Wednesday".
    #[must_use]
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// A validated proleptic Gregorian calendar date.
///
/// Ordering is chronological.
///
/// ```rust
/// use luach_rs::{GregorianDate, Weekday};
///
/// let date: GregorianDate = "2005-04-06".parse().unwrap();
/// assert_eq!(date.weekday(), Weekday::Wednesday);
/// assert_eq!(date.to_legacy_weekday_string(), "Wed 4/6/2005");
///
/// let next = date.add_days(30).unwrap();
/// assert_eq!(next.to_string(), "2005-05-06");
/// assert_eq!(date.days_until(&next), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a date without validating the month, the day or the range.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `GregorianDate`, rejecting months and days that do not
    /// exist and dates outside the supported range.
    pub fn try_new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LuachError::invalid_month()
                .with_message("Gregorian month must be within 1..=12."));
        }
        if day == 0 || day > gregorian::days_in_month(year, month) {
            return Err(LuachError::invalid_day().with_enum(ErrorMessage::DayOutOfRange));
        }
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(LuachError::invalid_year().with_enum(ErrorMessage::GregorianDateOutOfRange));
        }
        let date = Self::new_unchecked(year, month, day);
        if date.to_epoch_days().unsigned_abs() > MAX_EPOCH_DAYS.unsigned_abs() {
            return Err(LuachError::invalid_year().with_enum(ErrorMessage::GregorianDateOutOfRange));
        }
        Ok(date)
    }

    /// Creates a date from a count of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i32) -> LuachResult<Self> {
        if epoch_days.unsigned_abs() > MAX_EPOCH_DAYS.unsigned_abs() {
            return Err(LuachError::invalid_year().with_enum(ErrorMessage::GregorianDateOutOfRange));
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i32 {
        gregorian::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns a new date `days` after this one. Negative values move
    /// backwards.
    pub fn add_days(&self, days: i32) -> LuachResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(LuachError::invalid_year().with_enum(ErrorMessage::GregorianDateOutOfRange))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the signed number of days from this date to `other`.
    #[inline]
    #[must_use]
    pub const fn days_until(&self, other: &Self) -> i32 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether the date's year has a February 29th.
    #[inline]
    #[must_use]
    pub const fn in_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.to_epoch_days())
    }

    /// Converts this date to the Hebrew calendar.
    pub fn to_hebrew(&self) -> LuachResult<HebrewDate> {
        HebrewDate::from_gregorian(self)
    }

    /// Returns the legacy `M/D/YYYY` form, e.g. `4/6/2005`.
    #[must_use]
    pub fn to_legacy_string(&self) -> String {
        alloc::format!("{}/{}/{}", self.month, self.day, self.year)
    }

    /// Returns the legacy form prefixed by the short weekday name, e.g.
    /// `Wed 4/6/2005`.
    #[must_use]
    pub fn to_legacy_weekday_string(&self) -> String {
        alloc::format!(
            "{} {}",
            self.weekday().short_name(),
            self.to_legacy_string()
        )
    }

    /// Returns the ISO 8601 form of this date.
    #[must_use]
    pub fn to_ixdtf_string(&self) -> String {
        FormattableIsoDate(self.year, self.month, self.day)
            .write_to_string()
            .into()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&FormattableIsoDate(self.year, self.month, self.day), f)
    }
}

impl FromStr for GregorianDate {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parsers::parse_iso_date(s.as_bytes())?;
        Self::try_new(year, month, day)
    }
}
