//! This module implements parsing and formatting of date strings.
//!
//! Gregorian dates use ISO 8601 calendar dates, parsed with `ixdtf`.
//! Hebrew dates use the GEDCOM form `[[day] month] year`, e.g.
//! `26 ADS 5765`, optionally preceded by the `@#DHEBREW@` calendar escape.
//! A GEDCOM date value may also carry a qualifier (`ABT 5776`), an
//! interpretation (`INT 5776 (phrase)`) or two dates (`BET .. AND ..`,
//! `FROM .. TO ..`).

use alloc::{format, string::ToString, vec::Vec};

use ixdtf::{parsers::IxdtfParser, ParseError};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::ErrorMessage,
    hebrew::{
        DateQualifier, HebrewDateRange, HebrewDateValue, HebrewMonth, PartialHebrewDate,
        RangeKind,
    },
    LuachError, LuachResult,
};

const GEDCOM_HEBREW_ESCAPE: &str = "@#DHEBREW@";

/// Maps an ixdtf `ParseError` to a syntax `LuachError`
fn map_parse_error(err: ParseError) -> LuachError {
    use ParseError::*;
    let message = match err {
        InvalidMonthRange => "Month is outside valid range (1-12)".to_string(),
        InvalidDayRange => "Day is outside valid range for the given month/year".to_string(),
        DateYear => "Invalid year format".to_string(),
        DateMonth => "Invalid month format".to_string(),
        DateDay => "Invalid day format".to_string(),
        AbruptEnd { location } => format!("Unexpected end while parsing {location}"),
        InvalidEnd => "Unexpected character at end of input".to_string(),
        _ => format!("Parse error: {err:?}"),
    };
    LuachError::syntax().with_message(message)
}

/// Parses an ISO 8601 string and returns its calendar date.
///
/// Any time, offset or annotation in the string is accepted and ignored.
pub(crate) fn parse_iso_date(source: &[u8]) -> LuachResult<(i32, u8, u8)> {
    let record = IxdtfParser::from_utf8(source)
        .parse()
        .map_err(map_parse_error)?;

    let date = record
        .date
        .ok_or(LuachError::syntax().with_enum(ErrorMessage::ExpectedIsoDate))?;
    Ok((date.year, date.month, date.day))
}

/// Parses a single GEDCOM Hebrew date such as `26 ADS 5765`, `TMZ 5776` or
/// `5776`.
pub(crate) fn parse_gedcom_hebrew_date(source: &str) -> LuachResult<PartialHebrewDate> {
    let tokens: Vec<&str> = strip_calendar_escape(source)
        .split_ascii_whitespace()
        .collect();
    parse_partial_date(&tokens)
}

/// Parses a GEDCOM Hebrew date value: a single date, optionally preceded by
/// a qualifier, an interpreted date, a range or a period.
pub(crate) fn parse_gedcom_hebrew_value(source: &str) -> LuachResult<HebrewDateValue> {
    let source = strip_calendar_escape(source);
    let tokens: Vec<&str> = source.split_ascii_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Err(LuachError::syntax().with_enum(ErrorMessage::ExpectedGedcomDate));
    };
    let keyword = first.strip_suffix('.').unwrap_or(first);

    if ["BET", "BTW", "BETWEEN"]
        .iter()
        .any(|token| token.eq_ignore_ascii_case(keyword))
    {
        return parse_range(RangeKind::Between, rest, "AND");
    }
    if keyword.eq_ignore_ascii_case("FROM") && find_keyword(rest, "TO").is_some() {
        return parse_range(RangeKind::Period, rest, "TO");
    }
    if keyword.eq_ignore_ascii_case("INT") {
        return parse_interpreted(&source[first.len()..]);
    }

    match DateQualifier::from_keyword(first) {
        Some(qualifier) => Ok(HebrewDateValue::Qualified(
            qualifier,
            parse_partial_date(rest)?,
        )),
        None => Ok(HebrewDateValue::Date(parse_partial_date(&tokens)?)),
    }
}

fn strip_calendar_escape(source: &str) -> &str {
    let source = source.trim();
    source
        .strip_prefix(GEDCOM_HEBREW_ESCAPE)
        .unwrap_or(source)
        .trim_start()
}

fn find_keyword(tokens: &[&str], keyword: &str) -> Option<usize> {
    tokens
        .iter()
        .position(|token| token.eq_ignore_ascii_case(keyword))
}

fn parse_range(kind: RangeKind, tokens: &[&str], separator: &str) -> LuachResult<HebrewDateValue> {
    let index = find_keyword(tokens, separator)
        .ok_or(LuachError::syntax().with_enum(ErrorMessage::ExpectedRangeEnd))?;
    let (start, end) = (&tokens[..index], &tokens[index + 1..]);
    if start.is_empty() || end.is_empty() {
        return Err(LuachError::syntax().with_enum(ErrorMessage::ExpectedRangeEnd));
    }
    let range = HebrewDateRange::new(kind, parse_partial_date(start)?, parse_partial_date(end)?);
    Ok(HebrewDateValue::Range(range))
}

/// Parses the remainder of `INT <date> (<phrase>)`.
fn parse_interpreted(source: &str) -> LuachResult<HebrewDateValue> {
    let (date, phrase) = source
        .split_once('(')
        .ok_or(LuachError::syntax().with_enum(ErrorMessage::ExpectedInterpretedPhrase))?;
    let phrase = phrase.trim_end();
    let phrase = phrase.strip_suffix(')').unwrap_or(phrase).trim();

    let tokens: Vec<&str> = date.split_ascii_whitespace().collect();
    Ok(HebrewDateValue::Interpreted {
        date: parse_partial_date(&tokens)?,
        phrase: phrase.to_string(),
    })
}

/// Parses `[[day] month] year` from its tokens.
fn parse_partial_date(tokens: &[&str]) -> LuachResult<PartialHebrewDate> {
    let (day, month, year) = match tokens {
        [year] => (None, None, *year),
        [month, year] => (None, Some(*month), *year),
        [day, month, year] => (Some(*day), Some(*month), *year),
        _ => return Err(LuachError::syntax().with_enum(ErrorMessage::ExpectedGedcomDate)),
    };

    let year = parse_number::<i32>(year)?;
    let is_leap = date_equations::hebrew::is_leap_year(year);
    let month = month
        .map(|token| {
            HebrewMonth::from_gedcom_abbreviation(token, is_leap).ok_or(
                LuachError::syntax()
                    .with_message(format!("unknown Hebrew month abbreviation `{token}`.")),
            )
        })
        .transpose()?;
    let day = day.map(parse_number::<u8>).transpose()?;

    PartialHebrewDate::try_new(year, month, day)
}

fn parse_number<T: core::str::FromStr>(token: &str) -> LuachResult<T> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LuachError::syntax().with_enum(ErrorMessage::ExpectedGedcomDate));
    }
    token
        .parse::<T>()
        .map_err(|_| LuachError::syntax().with_enum(ErrorMessage::ExpectedGedcomDate))
}

// ==== Formatting ====

/// An ISO 8601 calendar date: year, month and day.
#[derive(Debug)]
pub struct FormattableIsoDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableIsoDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

impl_display_with_writeable!(FormattableIsoDate);

/// A GEDCOM Hebrew date, `[[day] month] year`.
#[derive(Debug)]
pub struct FormattableGedcomDate {
    pub day: Option<u8>,
    pub month: Option<HebrewMonth>,
    pub year: i32,
}

impl Writeable for FormattableGedcomDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(day) = self.day {
            day.write_to(sink)?;
            sink.write_char(' ')?;
        }
        if let Some(month) = self.month {
            let is_leap = date_equations::hebrew::is_leap_year(self.year);
            sink.write_str(month.gedcom_abbreviation(is_leap))?;
            sink.write_char(' ')?;
        }
        self.year.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let mut hint = self.year.writeable_length_hint();
        if let Some(day) = self.day {
            hint += day.writeable_length_hint() + 1;
        }
        if self.month.is_some() {
            hint += 4;
        }
        hint
    }
}

impl_display_with_writeable!(FormattableGedcomDate);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let digits = u32_to_digits(y.unsigned_abs());
    // Extended years always carry six digits.
    for digit in digits.iter().skip(3) {
        digit.write_to(sink)?;
    }
    Ok(())
}

fn u32_to_digits(mut value: u32) -> [u8; 9] {
    let mut output = [0; 9];
    let mut i = 9;
    while i != 0 {
        output[i - 1] = (value % 10) as u8;
        value /= 10;
        i -= 1;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn iso_dates() {
        assert_eq!(parse_iso_date(b"2005-04-06").unwrap(), (2005, 4, 6));
        assert_eq!(parse_iso_date(b"20050406").unwrap(), (2005, 4, 6));
        assert_eq!(parse_iso_date(b"-003760-09-07").unwrap(), (-3760, 9, 7));
        assert_eq!(parse_iso_date(b"+006239-09-25").unwrap(), (6239, 9, 25));
        assert_eq!(
            parse_iso_date(b"2005-13-06").unwrap_err().kind(),
            ErrorKind::Syntax
        );
        assert_eq!(parse_iso_date(b"2005-04").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(parse_iso_date(b"").unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn gedcom_dates() {
        let date = parse_gedcom_hebrew_date("26 ADS 5765").unwrap();
        assert_eq!(date.year, 5765);
        assert_eq!(date.month, Some(HebrewMonth::Adar));
        assert_eq!(date.day, Some(26));

        let date = parse_gedcom_hebrew_date("@#DHEBREW@ 1 tsh 5766").unwrap();
        assert_eq!(date.month, Some(HebrewMonth::Tishrei));
        assert_eq!(date.day, Some(1));

        let date = parse_gedcom_hebrew_date("  TMZ   5776 ").unwrap();
        assert_eq!(date.month, Some(HebrewMonth::Tamuz));
        assert_eq!(date.day, None);

        let date = parse_gedcom_hebrew_date("5776").unwrap();
        assert_eq!(date.month, None);
        assert_eq!(date.day, None);
    }

    #[test]
    fn gedcom_errors() {
        for source in ["", "JAN 5776", "1 2 TMZ 5776", "TMZ", "-5 TMZ 5776", "1 TMZ 57a6"] {
            assert_eq!(
                parse_gedcom_hebrew_date(source).unwrap_err().kind(),
                ErrorKind::Syntax,
                "{source}"
            );
        }
        let err = parse_gedcom_hebrew_date("FOO 5776").unwrap_err();
        assert_eq!(err.message(), "unknown Hebrew month abbreviation `FOO`.");
    }

    #[test]
    fn gedcom_adar_follows_the_year() {
        let date = parse_gedcom_hebrew_date("1 ADR 5766").unwrap();
        assert_eq!(date.month, Some(HebrewMonth::Adar));
        let date = parse_gedcom_hebrew_date("ADR 5765").unwrap();
        assert_eq!(date.month, Some(HebrewMonth::AdarI));
        let date = parse_gedcom_hebrew_date("ADS 5765").unwrap();
        assert_eq!(date.month, Some(HebrewMonth::Adar));

        let common = FormattableGedcomDate {
            day: Some(1),
            month: Some(HebrewMonth::Adar),
            year: 5766,
        };
        assert_eq!(common.to_string(), "1 ADR 5766");
    }

    #[test]
    fn gedcom_values() {
        let value = parse_gedcom_hebrew_value("@#DHEBREW@ BET TMZ 5776 AND AAV 5776").unwrap();
        let HebrewDateValue::Range(range) = value else {
            panic!("expected a range");
        };
        assert_eq!(range.kind(), RangeKind::Between);
        assert_eq!(range.start().month, Some(HebrewMonth::Tamuz));
        assert_eq!(range.end().month, Some(HebrewMonth::Av));

        let value = parse_gedcom_hebrew_value("FROM 5776 TO 5777").unwrap();
        assert!(matches!(value, HebrewDateValue::Range(range) if range.kind() == RangeKind::Period));

        let value = parse_gedcom_hebrew_value("BEF. TMZ 5776").unwrap();
        assert!(matches!(
            value,
            HebrewDateValue::Qualified(DateQualifier::Before, _)
        ));

        let err = parse_gedcom_hebrew_value("BET 5776 TO 5777").unwrap_err();
        assert_eq!(err.message(), ErrorMessage::ExpectedRangeEnd.to_str());
        let err = parse_gedcom_hebrew_value("INT TMZ 5776").unwrap_err();
        assert_eq!(err.message(), ErrorMessage::ExpectedInterpretedPhrase.to_str());
    }

    #[test]
    fn formatting() {
        assert_eq!(FormattableIsoDate(2005, 4, 6).to_string(), "2005-04-06");
        assert_eq!(FormattableIsoDate(-3760, 9, 7).to_string(), "-003760-09-07");
        assert_eq!(FormattableIsoDate(12_345, 1, 1).to_string(), "+012345-01-01");
        assert_eq!(FormattableIsoDate(-1, 1, 1).to_string(), "-000001-01-01");

        let gedcom = FormattableGedcomDate {
            day: Some(26),
            month: Some(HebrewMonth::Adar),
            year: 5765,
        };
        assert_eq!(gedcom.to_string(), "26 ADS 5765");
        assert_eq!(gedcom.writeable_length_hint(), LengthHint::exact(11));
    }
}
