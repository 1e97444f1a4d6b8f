//! This module implements `HebrewDate` and the conversions in both
//! directions.

use alloc::string::String;
use core::{fmt, str::FromStr};

use core_maths::CoreFloat;
use date_equations::{
    gregorian,
    hebrew::{CHALAKIM_PER_HOUR, HOURS_PER_DAY, MONTHS_PER_CYCLE, MOLAD_INTERVAL, YEARS_PER_CYCLE},
};
use num_traits::ToPrimitive;

use super::{
    anchor::{tishrei1_epoch_days, EPOCH_ANCHOR},
    check_year, HebrewMonth, HebrewYear, MonthCode,
};
use crate::{
    error::ErrorMessage,
    options::AdarNaming,
    parsers::{self, FormattableGedcomDate},
    luach_assert, GregorianDate, LuachError, LuachResult, LuachUnwrap, MAX_HEBREW_YEAR,
    MIN_HEBREW_YEAR,
};

/// A validated date in the Hebrew calendar.
///
/// Ordering is chronological.
///
/// ```rust
/// use luach_rs::{options::AdarNaming, HebrewDate, HebrewMonth};
///
/// let date: HebrewDate = "26 ADS 5765".parse().unwrap();
/// assert_eq!(date.month(), HebrewMonth::Adar);
/// assert_eq!(date.display_name(AdarNaming::Letters), "Adar B 26, 5765");
/// assert_eq!(date.to_gregorian().to_string(), "2005-04-06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: HebrewMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `HebrewDate` from a year, a month number (1 Tishrei
    /// through 13 Elul) and a day.
    ///
    /// Fails with `InvalidYear` outside the supported years, `InvalidMonth`
    /// for month numbers outside `1..=13` or Adar I in a common year, and
    /// `InvalidDay` for days the month does not have.
    pub fn try_new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        check_year(year)?;
        let month = HebrewMonth::from_ordinal(month)
            .ok_or(LuachError::invalid_month().with_enum(ErrorMessage::MonthOutOfRange))?;
        Self::try_new_with_month(year, month, day)
    }

    /// Creates a new `HebrewDate` from a [`HebrewMonth`].
    pub fn try_new_with_month(year: i32, month: HebrewMonth, day: u8) -> LuachResult<Self> {
        let hebrew_year = HebrewYear::try_new(year)?;
        let length = hebrew_year
            .month_length(month)
            .ok_or(LuachError::invalid_month().with_enum(ErrorMessage::AdarIInCommonYear))?;
        if day == 0 || day > length {
            return Err(LuachError::invalid_day().with_enum(ErrorMessage::DayOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        date_equations::hebrew::is_leap_year(self.year)
    }

    /// Returns the month code of this date's month.
    pub fn month_code(&self) -> LuachResult<MonthCode> {
        self.month.month_code(self.is_leap_year()).luach_unwrap()
    }

    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        HebrewYear::new_unchecked(self.year)
            .month_length(self.month)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        HebrewYear::new_unchecked(self.year).length()
    }

    /// Returns the `HebrewYear` this date belongs to.
    #[must_use]
    pub const fn hebrew_year(&self) -> HebrewYear {
        HebrewYear::new_unchecked(self.year)
    }

    /// Converts this date to the Gregorian calendar.
    ///
    /// Starts at 1 Tishrei and adds the length of every month before this
    /// date's month, then the days within the month.
    #[must_use]
    pub fn to_gregorian(&self) -> GregorianDate {
        let year = HebrewYear::new_unchecked(self.year);
        // A validated month always exists in its year.
        let before = year.days_before_month(self.month).unwrap_or_default();
        let epoch_days =
            year.new_year_epoch_days() + i32::from(before) + i32::from(self.day) - 1;
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        GregorianDate::new_unchecked(year, month, day)
    }

    /// Converts a Gregorian date to the Hebrew calendar.
    ///
    /// Fails with `InvalidYear` when the date falls outside the supported
    /// Hebrew years.
    pub fn from_gregorian(date: &GregorianDate) -> LuachResult<Self> {
        let target = date.to_epoch_days();
        if target < tishrei1_epoch_days(MIN_HEBREW_YEAR)
            || target >= tishrei1_epoch_days(MAX_HEBREW_YEAR + 1)
        {
            return Err(LuachError::invalid_year().with_enum(ErrorMessage::HebrewYearOutOfRange));
        }

        let estimate = estimate_year(EPOCH_ANCHOR.days_since_epoch_of(date))?;
        let year = bracket_year(estimate, target);
        #[cfg(feature = "log")]
        log::trace!("{date}: estimated Hebrew year {estimate}, bracketed to {year}");

        let year = HebrewYear::new_unchecked(year);
        let mut remaining = target - year.new_year_epoch_days();
        luach_assert!(
            (0..i32::from(year.length())).contains(&remaining),
            "{date} is not within Hebrew year {}",
            year.year()
        );

        for month in year.months() {
            luach_assert!(
                month != HebrewMonth::AdarI || year.is_leap(),
                "Adar I reached in common year {}",
                year.year()
            );
            let length = i32::from(year.month_length(month).luach_unwrap()?);
            if remaining < length {
                // `remaining` is below a month length here.
                return Ok(Self::new_unchecked(year.year(), month, remaining as u8 + 1));
            }
            remaining -= length;
        }

        Err(LuachError::assert())
    }

    /// Returns the legacy `month/day/year` form, e.g. `7/26/5765`.
    #[must_use]
    pub fn to_legacy_string(&self) -> String {
        alloc::format!("{}/{}/{}", self.month.ordinal(), self.day, self.year)
    }

    /// Returns the English form, e.g. `Adar B 26, 5765`.
    #[must_use]
    pub fn display_name(&self, naming: AdarNaming) -> String {
        alloc::format!(
            "{} {}, {}",
            self.month.name(self.is_leap_year(), naming),
            self.day,
            self.year
        )
    }

    pub(crate) fn formattable(&self) -> FormattableGedcomDate {
        FormattableGedcomDate {
            day: Some(self.day),
            month: Some(self.month),
            year: self.year,
        }
    }
}

/// The mean length of a Hebrew year in days: 235 molad intervals spread
/// over 19 years.
fn mean_year_length() -> f64 {
    let (days, hours, chalakim) = MOLAD_INTERVAL;
    let month = days as f64
        + hours as f64 / HOURS_PER_DAY as f64
        + chalakim as f64 / (CHALAKIM_PER_HOUR * HOURS_PER_DAY) as f64;
    month * MONTHS_PER_CYCLE as f64 / f64::from(YEARS_PER_CYCLE)
}

/// Estimates the Hebrew year containing the day `days_since_epoch` days
/// after the Hebrew epoch.
fn estimate_year(days_since_epoch: i64) -> LuachResult<i32> {
    let years = CoreFloat::floor(days_since_epoch as f64 / mean_year_length());
    Ok(years.to_i32().luach_unwrap()? + 1)
}

/// Moves `year` until `tishrei1(year) <= target < tishrei1(year + 1)`.
fn bracket_year(mut year: i32, target: i32) -> i32 {
    let anchor = tishrei1_epoch_days(year);
    if anchor == target {
        return year;
    }
    if anchor < target {
        while tishrei1_epoch_days(year + 1) <= target {
            year += 1;
        }
    } else {
        year -= 1;
        while tishrei1_epoch_days(year) > target {
            year -= 1;
        }
    }
    year
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.formattable(), f)
    }
}

impl FromStr for HebrewDate {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = parsers::parse_gedcom_hebrew_date(s)?;
        let (Some(month), Some(day)) = (record.month, record.day) else {
            return Err(LuachError::syntax()
                .with_message("a Hebrew date requires a day, a month and a year."));
        };
        Self::try_new_with_month(record.year, month, day)
    }
}
