//! Hebrew months, their names and their month codes.

use tinystr::{tinystr, TinyAsciiStr};

use crate::{error::ErrorMessage, options::AdarNaming, LuachError, LuachResult};

const MONTH_ONE: TinyAsciiStr<4> = tinystr!(4, "M01");
const MONTH_TWO: TinyAsciiStr<4> = tinystr!(4, "M02");
const MONTH_THREE: TinyAsciiStr<4> = tinystr!(4, "M03");
const MONTH_FOUR: TinyAsciiStr<4> = tinystr!(4, "M04");
const MONTH_FIVE: TinyAsciiStr<4> = tinystr!(4, "M05");
const MONTH_FIVE_LEAP: TinyAsciiStr<4> = tinystr!(4, "M05L");
const MONTH_SIX: TinyAsciiStr<4> = tinystr!(4, "M06");
const MONTH_SEVEN: TinyAsciiStr<4> = tinystr!(4, "M07");
const MONTH_EIGHT: TinyAsciiStr<4> = tinystr!(4, "M08");
const MONTH_NINE: TinyAsciiStr<4> = tinystr!(4, "M09");
const MONTH_TEN: TinyAsciiStr<4> = tinystr!(4, "M10");
const MONTH_ELEVEN: TinyAsciiStr<4> = tinystr!(4, "M11");
const MONTH_TWELVE: TinyAsciiStr<4> = tinystr!(4, "M12");

/// A month code as used by calendar libraries, e.g. `M05L` for Adar I.
///
/// Month codes stay the same across common and leap years: Adar is `M06`
/// whether or not it is preceded by Adar I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCode(pub(crate) TinyAsciiStr<4>);

impl MonthCode {
    /// Validates a month code for the Hebrew calendar.
    pub fn try_new(month_code: &TinyAsciiStr<4>) -> LuachResult<Self> {
        const HEBREW_MONTH_CODES: [TinyAsciiStr<4>; 13] = [
            MONTH_ONE,
            MONTH_TWO,
            MONTH_THREE,
            MONTH_FOUR,
            MONTH_FIVE,
            MONTH_FIVE_LEAP,
            MONTH_SIX,
            MONTH_SEVEN,
            MONTH_EIGHT,
            MONTH_NINE,
            MONTH_TEN,
            MONTH_ELEVEN,
            MONTH_TWELVE,
        ];

        if HEBREW_MONTH_CODES.contains(month_code) {
            return Ok(Self(*month_code));
        }
        Err(LuachError::invalid_month().with_enum(ErrorMessage::MonthCodeNotValid))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    #[must_use]
    pub fn is_leap_month(&self) -> bool {
        self.0 == MONTH_FIVE_LEAP
    }
}

impl core::str::FromStr for MonthCode {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = TinyAsciiStr::<4>::try_from_str(s)
            .map_err(|_| LuachError::invalid_month().with_enum(ErrorMessage::MonthCodeNotValid))?;
        Self::try_new(&code)
    }
}

impl core::fmt::Display for MonthCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A month of the Hebrew year, numbered from Tishrei.
///
/// `AdarI` only exists in leap years. In a common year the year runs from
/// `Shevat` straight to `Adar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HebrewMonth {
    Tishrei = 1,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    AdarI,
    /// Adar of a common year, or Adar II of a leap year.
    Adar,
    Nisan,
    Iyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
}

impl HebrewMonth {
    /// Every month in order, including `AdarI`.
    pub const ALL: [HebrewMonth; 13] = [
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Teves,
        Self::Shevat,
        Self::AdarI,
        Self::Adar,
        Self::Nisan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
    ];

    /// Returns the month for its number, 1 (Tishrei) through 13 (Elul).
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=13 => Some(Self::ALL[ordinal as usize - 1]),
            _ => None,
        }
    }

    /// Returns the month number, 1 (Tishrei) through 13 (Elul).
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the month.
    ///
    /// The Adar months are disambiguated only in leap years.
    #[must_use]
    pub const fn name(self, is_leap: bool, naming: AdarNaming) -> &'static str {
        match (self, is_leap, naming) {
            (Self::Tishrei, ..) => "Tishrei",
            (Self::Cheshvan, ..) => "Cheshvan",
            (Self::Kislev, ..) => "Kislev",
            (Self::Teves, ..) => "Teves",
            (Self::Shevat, ..) => "Shevat",
            (Self::AdarI, _, AdarNaming::Letters) => "Adar A",
            (Self::AdarI, _, AdarNaming::Numerals) => "Adar I",
            (Self::Adar, false, _) => "Adar",
            (Self::Adar, true, AdarNaming::Letters) => "Adar B",
            (Self::Adar, true, AdarNaming::Numerals) => "Adar II",
            (Self::Nisan, ..) => "Nisan",
            (Self::Iyar, ..) => "Iyar",
            (Self::Sivan, ..) => "Sivan",
            (Self::Tamuz, ..) => "Tamuz",
            (Self::Av, ..) => "Av",
            (Self::Elul, ..) => "Elul",
        }
    }

    /// Returns the GEDCOM month token in a year with the given leap status.
    ///
    /// `ADR` is the first Adar of the year: Adar I in a leap year and the only
    /// Adar of a common year. `ADS` is Adar II.
    #[must_use]
    pub const fn gedcom_abbreviation(self, is_leap: bool) -> &'static str {
        match self {
            Self::Tishrei => "TSH",
            Self::Cheshvan => "CSH",
            Self::Kislev => "KSL",
            Self::Teves => "TVT",
            Self::Shevat => "SHV",
            Self::AdarI => "ADR",
            Self::Adar if is_leap => "ADS",
            Self::Adar => "ADR",
            Self::Nisan => "NSN",
            Self::Iyar => "IYR",
            Self::Sivan => "SVN",
            Self::Tamuz => "TMZ",
            Self::Av => "AAV",
            Self::Elul => "ELL",
        }
    }

    /// Looks up a GEDCOM month token in a year with the given leap status,
    /// ignoring ASCII case.
    ///
    /// `ADS` is accepted for the Adar of a common year as well.
    #[must_use]
    pub fn from_gedcom_abbreviation(token: &str, is_leap: bool) -> Option<Self> {
        if token.eq_ignore_ascii_case("ADS") {
            return Some(Self::Adar);
        }
        Self::ALL
            .into_iter()
            .filter(|month| month.exists_in(is_leap))
            .find(|month| month.gedcom_abbreviation(is_leap).eq_ignore_ascii_case(token))
    }

    /// Returns the month code of this month.
    ///
    /// Month codes do not depend on the year: Adar I is `M05L` and Adar is
    /// `M06`. `is_leap` only decides whether the month exists.
    #[must_use]
    pub const fn month_code(self, is_leap: bool) -> Option<MonthCode> {
        let code = match self {
            Self::Tishrei => MONTH_ONE,
            Self::Cheshvan => MONTH_TWO,
            Self::Kislev => MONTH_THREE,
            Self::Teves => MONTH_FOUR,
            Self::Shevat => MONTH_FIVE,
            Self::AdarI if is_leap => MONTH_FIVE_LEAP,
            Self::AdarI => return None,
            Self::Adar => MONTH_SIX,
            Self::Nisan => MONTH_SEVEN,
            Self::Iyar => MONTH_EIGHT,
            Self::Sivan => MONTH_NINE,
            Self::Tamuz => MONTH_TEN,
            Self::Av => MONTH_ELEVEN,
            Self::Elul => MONTH_TWELVE,
        };
        Some(MonthCode(code))
    }

    /// Returns the month for a month code.
    pub fn from_month_code(code: &MonthCode) -> LuachResult<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.month_code(true).as_ref() == Some(code))
            .ok_or(LuachError::invalid_month().with_enum(ErrorMessage::MonthCodeNotValid))
    }

    /// Returns whether this month exists in a year with the given leap status.
    #[inline]
    #[must_use]
    pub const fn exists_in(self, is_leap: bool) -> bool {
        is_leap || !matches!(self, Self::AdarI)
    }

    /// Returns the next month in a year with the given leap status, or `None`
    /// after Elul.
    #[must_use]
    pub const fn next(self, is_leap: bool) -> Option<Self> {
        match self {
            Self::Shevat if !is_leap => Some(Self::Adar),
            Self::Elul => None,
            _ => Self::from_ordinal(self.ordinal() + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn ordinals() {
        for (index, month) in HebrewMonth::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.ordinal()), index + 1);
            assert_eq!(HebrewMonth::from_ordinal(month.ordinal()), Some(*month));
        }
        assert_eq!(HebrewMonth::from_ordinal(0), None);
        assert_eq!(HebrewMonth::from_ordinal(14), None);
    }

    #[test]
    fn adar_names() {
        use AdarNaming::*;
        assert_eq!(HebrewMonth::AdarI.name(true, Letters), "Adar A");
        assert_eq!(HebrewMonth::Adar.name(true, Letters), "Adar B");
        assert_eq!(HebrewMonth::AdarI.name(true, Numerals), "Adar I");
        assert_eq!(HebrewMonth::Adar.name(true, Numerals), "Adar II");
        assert_eq!(HebrewMonth::Adar.name(false, Letters), "Adar");
        assert_eq!(HebrewMonth::Adar.name(false, Numerals), "Adar");
        assert_eq!(HebrewMonth::Teves.name(false, Letters), "Teves");
    }

    #[test]
    fn gedcom_tokens() {
        for is_leap in [true, false] {
            for month in HebrewMonth::ALL.into_iter().filter(|m| m.exists_in(is_leap)) {
                assert_eq!(
                    HebrewMonth::from_gedcom_abbreviation(month.gedcom_abbreviation(is_leap), is_leap),
                    Some(month)
                );
            }
        }
        assert_eq!(
            HebrewMonth::from_gedcom_abbreviation("tmz", false),
            Some(HebrewMonth::Tamuz)
        );
        assert_eq!(HebrewMonth::from_gedcom_abbreviation("JAN", true), None);
    }

    #[test]
    fn adar_tokens_follow_leap_status() {
        assert_eq!(HebrewMonth::AdarI.gedcom_abbreviation(true), "ADR");
        assert_eq!(HebrewMonth::Adar.gedcom_abbreviation(true), "ADS");
        assert_eq!(HebrewMonth::Adar.gedcom_abbreviation(false), "ADR");

        assert_eq!(
            HebrewMonth::from_gedcom_abbreviation("ADR", true),
            Some(HebrewMonth::AdarI)
        );
        assert_eq!(
            HebrewMonth::from_gedcom_abbreviation("ADR", false),
            Some(HebrewMonth::Adar)
        );
        assert_eq!(
            HebrewMonth::from_gedcom_abbreviation("ads", false),
            Some(HebrewMonth::Adar)
        );
    }

    #[test]
    fn month_codes() {
        assert_eq!(
            HebrewMonth::AdarI.month_code(true).unwrap().as_str(),
            "M05L"
        );
        assert_eq!(HebrewMonth::AdarI.month_code(false), None);
        assert_eq!(HebrewMonth::Adar.month_code(false).unwrap().as_str(), "M06");
        assert_eq!(HebrewMonth::Adar.month_code(true).unwrap().as_str(), "M06");
        assert_eq!(HebrewMonth::Elul.month_code(true).unwrap().as_str(), "M12");

        let code = MonthCode::from_str("M05L").unwrap();
        assert!(code.is_leap_month());
        assert_eq!(HebrewMonth::from_month_code(&code).unwrap(), HebrewMonth::AdarI);
        let code = MonthCode::from_str("M07").unwrap();
        assert_eq!(HebrewMonth::from_month_code(&code).unwrap(), HebrewMonth::Nisan);

        assert!(MonthCode::from_str("M13").is_err());
        assert!(MonthCode::from_str("M06L").is_err());
        assert!(MonthCode::from_str("month").is_err());
    }

    #[test]
    fn next_month_skips_adar_i_in_common_years() {
        assert_eq!(HebrewMonth::Shevat.next(false), Some(HebrewMonth::Adar));
        assert_eq!(HebrewMonth::Shevat.next(true), Some(HebrewMonth::AdarI));
        assert_eq!(HebrewMonth::AdarI.next(true), Some(HebrewMonth::Adar));
        assert_eq!(HebrewMonth::Elul.next(true), None);
        assert!(!HebrewMonth::AdarI.exists_in(false));
        assert!(HebrewMonth::Adar.exists_in(false));
    }
}
