//! This module implements `LuachError`.

use alloc::borrow::Cow;
use core::fmt;

/// `LuachError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// The year is outside the supported range.
    InvalidYear,
    /// The month does not exist, or does not exist in the given year.
    InvalidMonth,
    /// The day does not exist in the given month.
    InvalidDay,
    /// The provided text could not be parsed.
    Syntax,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::InvalidYear => "InvalidYear",
            Self::InvalidMonth => "InvalidMonth",
            Self::InvalidDay => "InvalidDay",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type for `luach_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuachError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl LuachError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid year error.
    #[must_use]
    pub fn invalid_year() -> Self {
        Self::new(ErrorKind::InvalidYear)
    }

    /// Create an invalid month error.
    #[must_use]
    pub fn invalid_month() -> Self {
        Self::new(ErrorKind::InvalidMonth)
    }

    /// Create an invalid day error.
    #[must_use]
    pub fn invalid_day() -> Self {
        Self::new(ErrorKind::InvalidDay)
    }

    /// Create a syntax error.
    #[must_use]
    pub fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_enum(ErrorMessage::Assertion)
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a predefined message to the error.
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for LuachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for LuachError {}

/// The error messages shared across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    HebrewYearOutOfRange,
    GregorianDateOutOfRange,
    MonthOutOfRange,
    AdarIInCommonYear,
    DayOutOfRange,
    MonthCodeNotValid,
    DayWithoutMonth,
    ExpectedGedcomDate,
    ExpectedRangeEnd,
    ExpectedInterpretedPhrase,
    ExpectedIsoDate,
    Assertion,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::HebrewYearOutOfRange => "Hebrew year is outside the supported range 1..=9999.",
            Self::GregorianDateOutOfRange => "Gregorian date is outside the supported range.",
            Self::MonthOutOfRange => "Hebrew month must be within 1..=13.",
            Self::AdarIInCommonYear => "Adar I (month 6) only exists in leap years.",
            Self::DayOutOfRange => "day is not within the month.",
            Self::MonthCodeNotValid => "month code is not valid for the Hebrew calendar.",
            Self::DayWithoutMonth => "a day was provided without a month.",
            Self::ExpectedGedcomDate => "expected a Hebrew date in the form `[[day] month] year`.",
            Self::ExpectedRangeEnd => "a date range requires two dates joined by `AND` or `TO`.",
            Self::ExpectedInterpretedPhrase => {
                "an interpreted date requires a phrase in parentheses."
            }
            Self::ExpectedIsoDate => "expected an ISO 8601 calendar date.",
            Self::Assertion => "internal invariant failed.",
        }
    }
}
