use crate::{Error, Result};
use std::fmt;

pub mod calendar;

pub const MIN_YEAR: i32 = 2015;

/// Calendar month a report is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetMonth {
    pub year: i32,
    pub month: u8,
}

impl TargetMonth {
    pub fn new(month: u8, year: i32) -> Self {
        TargetMonth { year, month }
    }

    pub fn next(&self) -> TargetMonth {
        if self.month == 12 {
            TargetMonth::new(1, self.year + 1)
        } else {
            TargetMonth::new(self.month + 1, self.year)
        }
    }

    /// Sheet and file name label, e.g. `03.2023`.
    pub fn label(&self) -> String {
        format!("{:02}.{}", self.month, self.year)
    }
}

impl fmt::Display for TargetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Parses either a single `MM.YY[YY]` token or an inclusive `MM.YY[YY]-MM.YY[YY]` range.
/// A range whose start is after its end yields no months.
pub fn parse_months(input: &str, current_year: i32) -> Result<Vec<TargetMonth>> {
    let input = input.trim();

    if !input.contains('-') {
        return Ok(vec![parse_month_year(input, current_year)?]);
    }

    let (start, end) = match input.split_once('-') {
        Some((start, end)) if !end.contains('-') => (start, end),
        _ => Err(Error::InvalidDateFormat(input.into()))?,
    };

    let start = parse_month_year(start, current_year)?;
    let end = parse_month_year(end, current_year)?;

    let mut res = vec![];
    let mut cursor = start;

    while cursor <= end {
        res.push(cursor);
        cursor = cursor.next();
    }

    Ok(res)
}

pub fn parse_month_year(input: &str, current_year: i32) -> Result<TargetMonth> {
    let (month, year) = match input.trim().split_once('.') {
        Some((month, year)) if !year.contains('.') => (month, year),
        _ => Err(Error::InvalidDateFormat(input.into()))?,
    };

    let month: u8 = month
        .parse()
        .map_err(|_| Error::InvalidMonth(month.into()))?;

    if !year.chars().all(|it| it.is_ascii_digit()) {
        Err(Error::InvalidYearFormat(year.into()))?
    }

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().map_err(|_| Error::InvalidYearFormat(year.into()))?,
        4 => year
            .parse()
            .map_err(|_| Error::InvalidYearFormat(year.into()))?,
        _ => Err(Error::InvalidYearFormat(year.into()))?,
    };

    if !(1..=12).contains(&month) {
        Err(Error::InvalidMonth(month.to_string()))?
    }

    if !(MIN_YEAR..=current_year).contains(&year) {
        Err(Error::InvalidYear { year, current_year })?
    }

    Ok(TargetMonth::new(month, year))
}
