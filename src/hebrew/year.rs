//! Hebrew years, their lengths and the lengths of their months.

use core::fmt;

use date_equations::{gregorian, hebrew};

use super::{anchor::tishrei1_epoch_days, check_year, HebrewDate, HebrewMonth};
use crate::{GregorianDate, LuachResult, LuachUnwrap};

/// The length classification of a Hebrew year.
///
/// The classification decides the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearKind {
    /// Haser: 353 or 383 days, Cheshvan and Kislev both have 29 days.
    Deficient,
    /// Kesidrah: 354 or 384 days, Cheshvan has 29 days and Kislev 30.
    Regular,
    /// Shalem: 355 or 385 days, Cheshvan and Kislev both have 30 days.
    Complete,
}

impl YearKind {
    /// Classifies a year length, or returns `None` for a length no year can
    /// have.
    #[must_use]
    pub const fn from_length(length: u16, is_leap: bool) -> Option<Self> {
        let base = if is_leap { 383 } else { 353 };
        match length.checked_sub(base) {
            Some(0) => Some(Self::Deficient),
            Some(1) => Some(Self::Regular),
            Some(2) => Some(Self::Complete),
            _ => None,
        }
    }
}

impl fmt::Display for YearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Regular => "regular",
            Self::Complete => "complete",
        })
    }
}

/// Returns the number of days in `month` (1 Tishrei .. 13 Elul) of a year
/// with the given leap status and length.
///
/// Returns `None` for month numbers outside `1..=13` and for Adar I (6) in
/// a common year.
///
/// ```rust
/// use luach_rs::month_length;
///
/// assert_eq!(month_length(2, false, 355), Some(30));
/// assert_eq!(month_length(3, true, 383), Some(29));
/// assert_eq!(month_length(6, false, 354), None);
/// ```
#[must_use]
pub const fn month_length(month: u8, is_leap: bool, year_length: u16) -> Option<u8> {
    let length = match month {
        1 | 5 | 8 | 10 | 12 => 30,
        4 | 7 | 9 | 11 | 13 => 29,
        6 if is_leap => 30,
        2 if matches!(year_length, 355 | 385) => 30,
        2 => 29,
        3 if matches!(year_length, 353 | 383) => 29,
        3 => 30,
        _ => return None,
    };
    Some(length)
}

/// Returns the number of days in `year`.
///
/// ```rust
/// use luach_rs::length_of_year;
///
/// assert_eq!(length_of_year(5765).unwrap(), 383);
/// assert_eq!(length_of_year(5766).unwrap(), 354);
/// ```
pub fn length_of_year(year: i32) -> LuachResult<u16> {
    check_year(year)?;
    Ok(year_length(year))
}

pub(crate) const fn year_length(year: i32) -> u16 {
    (tishrei1_epoch_days(year + 1) - tishrei1_epoch_days(year)) as u16
}

/// A Hebrew year with its leap status, length and start.
///
/// `HebrewYear` is a plain value computed on demand; nothing is cached
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewYear {
    year: i32,
    is_leap: bool,
    new_year_epoch_days: i32,
    length: u16,
}

impl HebrewYear {
    /// Computes a year without checking it is within the supported range.
    pub(crate) const fn new_unchecked(year: i32) -> Self {
        let new_year_epoch_days = tishrei1_epoch_days(year);
        Self {
            year,
            is_leap: hebrew::is_leap_year(year),
            new_year_epoch_days,
            length: (tishrei1_epoch_days(year + 1) - new_year_epoch_days) as u16,
        }
    }

    /// Computes the Hebrew year `year`.
    pub fn try_new(year: i32) -> LuachResult<Self> {
        check_year(year)?;
        Ok(Self::new_unchecked(year))
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns whether the year has thirteen months.
    #[inline]
    #[must_use]
    pub const fn is_leap(&self) -> bool {
        self.is_leap
    }

    /// Returns the number of days in the year.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// Classifies the year by its length.
    pub fn kind(&self) -> LuachResult<YearKind> {
        YearKind::from_length(self.length, self.is_leap).luach_unwrap()
    }

    /// Returns the Gregorian date of 1 Tishrei.
    #[must_use]
    pub const fn new_year(&self) -> GregorianDate {
        let (year, month, day) = gregorian::ymd_from_epoch_days(self.new_year_epoch_days);
        GregorianDate::new_unchecked(year, month, day)
    }

    #[inline]
    pub(crate) const fn new_year_epoch_days(&self) -> i32 {
        self.new_year_epoch_days
    }

    /// Returns the length of `month` in this year, or `None` when the month
    /// does not exist in this year.
    #[must_use]
    pub const fn month_length(&self, month: HebrewMonth) -> Option<u8> {
        month_length(month.ordinal(), self.is_leap, self.length)
    }

    /// Returns the months of this year in order.
    pub fn months(&self) -> impl Iterator<Item = HebrewMonth> {
        let is_leap = self.is_leap;
        HebrewMonth::ALL
            .into_iter()
            .filter(move |month| month.exists_in(is_leap))
    }

    #[must_use]
    pub const fn month_count(&self) -> u8 {
        if self.is_leap {
            13
        } else {
            12
        }
    }

    /// Returns the number of days from 1 Tishrei to the first day of
    /// `month`, or `None` when the month does not exist in this year.
    #[must_use]
    pub fn days_before_month(&self, month: HebrewMonth) -> Option<u16> {
        if !month.exists_in(self.is_leap) {
            return None;
        }
        let mut days = 0;
        for earlier in self.months().take_while(|m| *m < month) {
            days += u16::from(self.month_length(earlier)?);
        }
        Some(days)
    }

    /// Returns the Gregorian date of the first day of `month`.
    #[must_use]
    pub fn month_start(&self, month: HebrewMonth) -> Option<GregorianDate> {
        let offset = self.days_before_month(month)?;
        let (year, month, day) =
            gregorian::ymd_from_epoch_days(self.new_year_epoch_days + i32::from(offset));
        Some(GregorianDate::new_unchecked(year, month, day))
    }

    /// Returns 29 Elul, the last day of the year.
    #[must_use]
    pub const fn last_day(&self) -> HebrewDate {
        HebrewDate::new_unchecked(self.year, HebrewMonth::Elul, 29)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn month_table() {
        for month in [1, 5, 8, 10, 12] {
            assert_eq!(month_length(month, false, 354), Some(30));
        }
        for month in [4, 7, 9, 11, 13] {
            assert_eq!(month_length(month, true, 384), Some(29));
        }
        assert_eq!(month_length(6, true, 383), Some(30));
        assert_eq!(month_length(6, false, 355), None);
        assert_eq!(month_length(0, false, 355), None);
        assert_eq!(month_length(14, true, 385), None);

        assert_eq!(month_length(2, false, 353), Some(29));
        assert_eq!(month_length(2, false, 354), Some(29));
        assert_eq!(month_length(2, true, 385), Some(30));
        assert_eq!(month_length(3, true, 383), Some(29));
        assert_eq!(month_length(3, false, 354), Some(30));
        assert_eq!(month_length(3, false, 355), Some(30));
    }

    #[test]
    fn year_kinds() {
        assert_eq!(YearKind::from_length(353, false), Some(YearKind::Deficient));
        assert_eq!(YearKind::from_length(384, true), Some(YearKind::Regular));
        assert_eq!(YearKind::from_length(385, true), Some(YearKind::Complete));
        assert_eq!(YearKind::from_length(383, false), None);
        assert_eq!(YearKind::from_length(356, false), None);
        assert_eq!(YearKind::from_length(12, false), None);
    }

    #[test]
    fn year_lengths() {
        let expected = [355, 353, 384, 355, 383, 355, 354, 385, 355, 354];
        for (year, length) in (5780..).zip(expected) {
            assert_eq!(length_of_year(year).unwrap(), length, "year {year}");
        }
        assert_eq!(length_of_year(5765).unwrap(), 383);
        assert_eq!(length_of_year(5776).unwrap(), 385);
        assert_eq!(length_of_year(9999).unwrap(), 353);
        assert_eq!(length_of_year(0).unwrap_err().kind(), ErrorKind::InvalidYear);
    }

    #[test]
    fn year_values() {
        let year = HebrewYear::try_new(5765).unwrap();
        assert!(year.is_leap());
        assert_eq!(year.length(), 383);
        assert_eq!(year.kind().unwrap(), YearKind::Deficient);
        assert_eq!(year.month_count(), 13);
        assert_eq!(year.months().count(), 13);
        assert_eq!(year.new_year(), GregorianDate::try_new(2004, 9, 16).unwrap());

        let year = HebrewYear::try_new(5766).unwrap();
        assert!(!year.is_leap());
        assert_eq!(year.kind().unwrap(), YearKind::Regular);
        assert_eq!(year.month_count(), 12);
        assert!(year.months().all(|month| month != HebrewMonth::AdarI));
        assert_eq!(year.month_length(HebrewMonth::AdarI), None);
        assert_eq!(year.days_before_month(HebrewMonth::AdarI), None);
    }

    #[test]
    fn months_sum_to_year_length() {
        for year in 5600..5900 {
            let year = HebrewYear::try_new(year).unwrap();
            let total: u16 = year
                .months()
                .map(|month| u16::from(year.month_length(month).unwrap()))
                .sum();
            assert_eq!(total, year.length());
            assert_eq!(YearKind::from_length(year.length(), year.is_leap()), Some(year.kind().unwrap()));
        }
    }

    #[test]
    fn month_starts() {
        let year = HebrewYear::try_new(5776).unwrap();
        assert_eq!(
            year.month_start(HebrewMonth::Tamuz).unwrap(),
            GregorianDate::try_new(2016, 7, 7).unwrap()
        );
        assert_eq!(year.days_before_month(HebrewMonth::Tishrei), Some(0));

        let year = HebrewYear::try_new(5765).unwrap();
        assert_eq!(
            year.month_start(HebrewMonth::AdarI).unwrap(),
            GregorianDate::try_new(2005, 2, 10).unwrap()
        );
        let year = HebrewYear::try_new(5766).unwrap();
        assert_eq!(
            year.month_start(HebrewMonth::Adar).unwrap(),
            GregorianDate::try_new(2006, 3, 1).unwrap()
        );
    }

    #[test]
    fn last_day() {
        let year = HebrewYear::try_new(5776).unwrap();
        let last = year.last_day();
        assert_eq!(last.month(), HebrewMonth::Elul);
        assert_eq!(last.day(), 29);
        assert_eq!(
            last.to_gregorian(),
            GregorianDate::try_new(2016, 10, 2).unwrap()
        );
    }
}
