use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Comparison operator used by one-sided qualifiers such as `stars:>=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchQualifierOperator {
    GreaterThan,
    LessThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
}

impl SearchQualifierOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchQualifierOperator::GreaterThan => ">",
            SearchQualifierOperator::LessThan => "<",
            SearchQualifierOperator::LessThanOrEqualTo => "<=",
            SearchQualifierOperator::GreaterThanOrEqualTo => ">=",
        }
    }
}

impl fmt::Display for SearchQualifierOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Bounds<T> {
    Exactly(T),
    Between(T, T),
    Compared(SearchQualifierOperator, T),
}

impl<T> Bounds<T> {
    fn map<U>(self, f: impl Fn(T) -> U) -> Bounds<U> {
        match self {
            Bounds::Exactly(value) => Bounds::Exactly(f(value)),
            Bounds::Between(min, max) => Bounds::Between(f(min), f(max)),
            Bounds::Compared(op, value) => Bounds::Compared(op, f(value)),
        }
    }
}

impl<T: FromStr> Bounds<T> {
    // Two-character operators are checked first so ">=5" is not read as ">" + "=5"
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some((min, max)) = input.split_once("..") {
            return Some(Bounds::Between(min.parse().ok()?, max.parse().ok()?));
        }
        for op in [
            SearchQualifierOperator::GreaterThanOrEqualTo,
            SearchQualifierOperator::LessThanOrEqualTo,
            SearchQualifierOperator::GreaterThan,
            SearchQualifierOperator::LessThan,
        ] {
            if let Some(rest) = input.strip_prefix(op.as_str()) {
                return rest.parse().ok().map(|value| Bounds::Compared(op, value));
            }
        }
        input.parse().ok().map(Bounds::Exactly)
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Exactly(value) => write!(f, "{}", value),
            Bounds::Between(min, max) => write!(f, "{}..{}", min, max),
            Bounds::Compared(op, value) => write!(f, "{}{}", op, value),
        }
    }
}

/// Numeric comparison for qualifiers like `size`, `forks` and `stars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range(Bounds<u64>);

impl Range {
    // Matches exactly `size`
    pub fn exactly(size: u64) -> Self {
        Range(Bounds::Exactly(size))
    }

    // Matches values from `min` to `max`, both inclusive
    pub fn between(min: u64, max: u64) -> Self {
        Range(Bounds::Between(min, max))
    }

    pub fn with_operator(size: u64, op: SearchQualifierOperator) -> Self {
        Range(Bounds::Compared(op, size))
    }

    pub fn greater_than(size: u64) -> Self {
        Self::with_operator(size, SearchQualifierOperator::GreaterThan)
    }

    pub fn greater_than_or_equals(size: u64) -> Self {
        Self::with_operator(size, SearchQualifierOperator::GreaterThanOrEqualTo)
    }

    pub fn less_than(size: u64) -> Self {
        Self::with_operator(size, SearchQualifierOperator::LessThan)
    }

    pub fn less_than_or_equals(size: u64) -> Self {
        Self::with_operator(size, SearchQualifierOperator::LessThanOrEqualTo)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bounds::<Digits>::parse(s)
            .map(|bounds| Range(bounds.map(|n| n.0)))
            .ok_or_else(|| Error::InvalidRange(s.to_owned()))
    }
}

/// Date comparison for qualifiers like `created` and `pushed`, rendered as `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange(Bounds<NaiveDate>);

impl DateRange {
    pub fn on(date: NaiveDate) -> Self {
        DateRange(Bounds::Exactly(date))
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange(Bounds::Between(from, to))
    }

    pub fn with_operator(date: NaiveDate, op: SearchQualifierOperator) -> Self {
        DateRange(Bounds::Compared(op, date))
    }

    pub fn greater_than(date: NaiveDate) -> Self {
        Self::with_operator(date, SearchQualifierOperator::GreaterThan)
    }

    pub fn greater_than_or_equals(date: NaiveDate) -> Self {
        Self::with_operator(date, SearchQualifierOperator::GreaterThanOrEqualTo)
    }

    pub fn less_than(date: NaiveDate) -> Self {
        Self::with_operator(date, SearchQualifierOperator::LessThan)
    }

    pub fn less_than_or_equals(date: NaiveDate) -> Self {
        Self::with_operator(date, SearchQualifierOperator::LessThanOrEqualTo)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.map(|date| date.format(DATE_FORMAT)), f)
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bounds::<IsoDate>::parse(s)
            .map(|bounds| DateRange(bounds.map(|date| date.0)))
            .ok_or_else(|| Error::InvalidDateRange(s.to_owned()))
    }
}

// Plain decimal digits only; `u64::from_str` would also take a leading `+`
struct Digits(u64);

impl FromStr for Digits {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        s.parse().map(Digits).map_err(|_| ())
    }
}

// Accepts only the `yyyy-MM-dd` layout that `Display` writes
struct IsoDate(NaiveDate);

impl FromStr for IsoDate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono also takes unpadded fields and signed years, so check the 4-2-2 digit shape first
        let shaped = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(());
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(IsoDate)
            .map_err(|_| ())
    }
}
