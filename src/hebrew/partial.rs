//! Hebrew dates that are missing their day, or their day and month.

use core::{fmt, str::FromStr};

use super::{HebrewDate, HebrewMonth, HebrewYear};
use crate::{
    error::ErrorMessage,
    options::ImpreciseDatePreference,
    parsers::{self, FormattableGedcomDate},
    GregorianDate, LuachError, LuachResult, LuachUnwrap,
};

/// A Hebrew date that may only name a month and year, or only a year, as
/// genealogical records often do.
///
/// ```rust
/// use luach_rs::{options::ImpreciseDatePreference, PartialHebrewDate};
///
/// let tamuz: PartialHebrewDate = "TMZ 5776".parse().unwrap();
/// let latest = tamuz.to_gregorian(ImpreciseDatePreference::FavorLatest).unwrap();
/// assert_eq!(latest.to_string(), "2016-08-04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialHebrewDate {
    pub year: i32,
    pub month: Option<HebrewMonth>,
    pub day: Option<u8>,
}

impl PartialHebrewDate {
    /// Creates a `PartialHebrewDate`. A day requires a month.
    pub fn try_new(year: i32, month: Option<HebrewMonth>, day: Option<u8>) -> LuachResult<Self> {
        if month.is_none() && day.is_some() {
            return Err(LuachError::syntax().with_enum(ErrorMessage::DayWithoutMonth));
        }
        Ok(Self { year, month, day })
    }

    /// Returns whether the date names a single day.
    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.month.is_some() && self.day.is_some()
    }

    /// Picks a single Hebrew date according to `preference`.
    ///
    /// A month without a day resolves to its first day, its last day or the
    /// day in the middle. A bare year resolves to 1 Tishrei, 29 Elul or the
    /// middle of Adar.
    pub fn resolve(&self, preference: ImpreciseDatePreference) -> LuachResult<HebrewDate> {
        use ImpreciseDatePreference::*;

        let year = HebrewYear::try_new(self.year)?;

        let (month, day) = match (self.month, self.day) {
            (Some(month), Some(day)) => (month, day),
            (None, Some(_)) => {
                return Err(LuachError::syntax().with_enum(ErrorMessage::DayWithoutMonth))
            }
            (Some(month), None) => {
                let length = year
                    .month_length(month)
                    .ok_or(LuachError::invalid_month().with_enum(ErrorMessage::AdarIInCommonYear))?;
                let day = match preference {
                    Precise | FavorEarliest => 1,
                    FavorLatest => length,
                    FavorMidpoint => length / 2,
                };
                (month, day)
            }
            (None, None) => match preference {
                Precise | FavorEarliest => (HebrewMonth::Tishrei, 1),
                FavorLatest => return Ok(year.last_day()),
                FavorMidpoint => {
                    let length = year.month_length(HebrewMonth::Adar).luach_unwrap()?;
                    (HebrewMonth::Adar, length / 2)
                }
            },
        };

        HebrewDate::try_new_with_month(self.year, month, day)
    }

    /// Resolves the date with `preference` and converts it to the Gregorian
    /// calendar.
    pub fn to_gregorian(&self, preference: ImpreciseDatePreference) -> LuachResult<GregorianDate> {
        Ok(self.resolve(preference)?.to_gregorian())
    }
}

impl From<HebrewDate> for PartialHebrewDate {
    fn from(date: HebrewDate) -> Self {
        Self {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }
}

impl fmt::Display for PartialHebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formattable = FormattableGedcomDate {
            day: self.day,
            month: self.month,
            year: self.year,
        };
        fmt::Display::fmt(&formattable, f)
    }
}

impl FromStr for PartialHebrewDate {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_gedcom_hebrew_date(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::string::ToString;

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn month_only() {
        let tamuz: PartialHebrewDate = "TMZ 5776".parse().unwrap();
        assert!(!tamuz.is_exact());
        let cases = [
            (ImpreciseDatePreference::Precise, date(2016, 7, 7)),
            (ImpreciseDatePreference::FavorEarliest, date(2016, 7, 7)),
            (ImpreciseDatePreference::FavorLatest, date(2016, 8, 4)),
            (ImpreciseDatePreference::FavorMidpoint, date(2016, 7, 20)),
        ];
        for (preference, expected) in cases {
            assert_eq!(tamuz.to_gregorian(preference).unwrap(), expected, "{preference}");
        }
    }

    #[test]
    fn year_only() {
        let year: PartialHebrewDate = "5776".parse().unwrap();
        let cases = [
            (ImpreciseDatePreference::Precise, date(2015, 9, 14)),
            (ImpreciseDatePreference::FavorEarliest, date(2015, 9, 14)),
            (ImpreciseDatePreference::FavorLatest, date(2016, 10, 2)),
            (ImpreciseDatePreference::FavorMidpoint, date(2016, 3, 24)),
        ];
        for (preference, expected) in cases {
            assert_eq!(year.to_gregorian(preference).unwrap(), expected, "{preference}");
        }
    }

    #[test]
    fn exact_dates_ignore_preference() {
        let exact: PartialHebrewDate = "13 TMZ 5776".parse().unwrap();
        assert!(exact.is_exact());
        assert_eq!(
            exact
                .to_gregorian(ImpreciseDatePreference::FavorLatest)
                .unwrap(),
            date(2016, 7, 19)
        );
    }

    #[test]
    fn adar_of_a_common_year() {
        let adar: PartialHebrewDate = "ADR 5766".parse().unwrap();
        assert_eq!(adar.month, Some(HebrewMonth::Adar));
        assert_eq!(
            adar.to_gregorian(ImpreciseDatePreference::FavorEarliest)
                .unwrap(),
            date(2006, 3, 1)
        );
        assert_eq!(
            adar.to_gregorian(ImpreciseDatePreference::FavorLatest)
                .unwrap(),
            date(2006, 3, 29)
        );
        assert_eq!(adar.to_string(), "ADR 5766");
    }

    #[test]
    fn invalid_partials() {
        assert_eq!(
            PartialHebrewDate::try_new(5776, None, Some(3))
                .unwrap_err()
                .kind(),
            ErrorKind::Syntax
        );
        let adar_i = PartialHebrewDate::try_new(5766, Some(HebrewMonth::AdarI), None).unwrap();
        assert_eq!(
            adar_i
                .resolve(ImpreciseDatePreference::Precise)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidMonth
        );
        let out_of_range = PartialHebrewDate::try_new(10_000, None, None).unwrap();
        assert_eq!(
            out_of_range
                .resolve(ImpreciseDatePreference::Precise)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidYear
        );
    }

    #[test]
    fn display() {
        let tamuz = PartialHebrewDate::try_new(5776, Some(HebrewMonth::Tamuz), None).unwrap();
        assert_eq!(tamuz.to_string(), "TMZ 5776");
        let year = PartialHebrewDate::try_new(5776, None, None).unwrap();
        assert_eq!(year.to_string(), "5776");
        let exact = PartialHebrewDate::from(HebrewDate::try_new(5765, 6, 1).unwrap());
        assert_eq!(exact.to_string(), "1 ADR 5765");
    }
}
