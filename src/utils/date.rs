//! Flexible date parsing for front-matter date fields.
//!
//! Authors write dates in many shapes (`2020-04-30`, `30.04.2020`,
//! `2020-04-30T20:10:20.123Z`, ...). [`get_date`] normalizes all of them
//! into one [`CalendarTime`] value, or fails with
//! [`DateError::InvalidDateFormat`] so the pipeline can surface an
//! authoring error instead of guessing.
//!
//! # Examples
//!
//! ```
//! use plover::utils::date::{get_date, CalendarTime};
//!
//! let date = get_date("2020-04-30").unwrap();
//! assert_eq!(date, CalendarTime::from_ymd(2020, 4, 30));
//! assert_eq!(get_date("30/04/2020").unwrap(), date);
//! assert!(get_date("wrongdate").is_err());
//! ```

use anyhow::{Result, bail};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Date parsing errors.
#[derive(Debug, Error)]
pub enum DateError {
    /// Input matched no supported layout, or a matched layout produced an
    /// out-of-range calendar field.
    #[error("unrecognized date format: `{0}`")]
    InvalidDateFormat(String),
}

/// Fixed UTC offset of a zoned calendar-time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    minutes: i16,
}

impl UtcOffset {
    /// UTC itself (`Z`, `+00:00`).
    pub const UTC: Self = Self { minutes: 0 };

    /// Offset from whole hours east (positive) or west (negative) of UTC.
    pub const fn from_hours(hours: i8) -> Self {
        Self {
            minutes: hours as i16 * 60,
        }
    }

    pub const fn from_minutes(minutes: i16) -> Self {
        Self { minutes }
    }

    /// Total offset in minutes, signed.
    pub const fn minutes(self) -> i16 {
        self.minutes
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            return write!(f, "Z");
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// A calendar-time value: wall-clock fields plus an optional UTC offset.
///
/// Equality is field-wise. A value without an offset is "naive" and never
/// compares equal to a zoned value at the same wall-clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
    pub offset: Option<UtcOffset>,
}

impl CalendarTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond: 0,
            offset: None,
        }
    }

    /// Naive midnight on the given date.
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub const fn with_microsecond(mut self, microsecond: u32) -> Self {
        self.microsecond = microsecond;
        self
    }

    /// Attach a UTC offset, turning a naive value into a zoned one.
    pub const fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Whether this value carries no timezone information.
    pub const fn is_naive(self) -> bool {
        self.offset.is_none()
    }

    /// Check all fields are within calendar range.
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
            ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if microsecond > 999_999 {
            bail!("microsecond is invalid: {microsecond}");
        }

        Ok(())
    }

    /// Format as RFC 3339 (ISO 8601) for Atom feeds.
    ///
    /// Naive values render without a suffix; zoned values render `Z` or
    /// `±HH:MM`. Microseconds are included only when non-zero.
    pub fn to_rfc3339(self) -> String {
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        );
        if self.microsecond > 0 {
            out.push_str(&format!(".{:06}", self.microsecond));
        }
        if let Some(offset) = self.offset {
            out.push_str(&offset.to_string());
        }
        out
    }

    /// Format as RFC 2822 for RSS feeds.
    ///
    /// Naive and UTC values render `GMT`; other offsets render `±HHMM`.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        let zone = match self.offset {
            None | Some(UtcOffset { minutes: 0 }) => "GMT".to_owned(),
            Some(offset) => {
                let sign = if offset.minutes < 0 { '-' } else { '+' };
                let abs = offset.minutes.unsigned_abs();
                format!("{sign}{:02}{:02}", abs / 60, abs % 60)
            }
        };

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} {}",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second,
            zone
        )
    }

    /// Zeller's congruence for weekday calculation.
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// ============================================================================
// Layout table
// ============================================================================

/// Optional time-of-day part shared by every layout: ` `/`T` separator,
/// `HH:MM`, optional seconds, optional fraction, optional `Z`/offset suffix.
const TIME_PART: &str = r"(?:[ T](?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.(?P<frac>\d{1,6}))?)?(?P<tz>Z|[+-]\d{2}:?\d{2})?)?";

/// Supported layouts in priority order: year-first then day-first, for
/// each of the separators `/`, `-`, `.`. Named capture groups carry the
/// field-extraction rule, so [`extract`] is uniform across layouts.
/// Compiled once at first use.
static LAYOUTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let templates = [
        r"^(?P<year>\d{4})S(?P<month>\d{1,2})S(?P<day>\d{1,2})T$",
        r"^(?P<day>\d{1,2})S(?P<month>\d{1,2})S(?P<year>\d{4})T$",
    ];

    let mut layouts = Vec::new();
    for template in templates {
        for separator in ["/", "-", r"\."] {
            let pattern = template.replace('S', separator).replace('T', TIME_PART);
            // Patterns are compile-time constants; a failure here is a bug
            if let Ok(regex) = Regex::new(&pattern) {
                layouts.push(regex);
            }
        }
    }
    layouts
});

/// Parse a textual date into a [`CalendarTime`].
///
/// Layouts are tried in a fixed priority order; the first one whose
/// pattern matches the whole input wins. A matched layout with
/// out-of-range fields fails rather than falling through to later
/// layouts, and nothing is ever silently defaulted.
pub fn get_date(text: &str) -> Result<CalendarTime, DateError> {
    let invalid = || DateError::InvalidDateFormat(text.to_owned());
    let trimmed = text.trim();

    for layout in LAYOUTS.iter() {
        let Some(caps) = layout.captures(trimmed) else {
            continue;
        };
        let date = extract(&caps).ok_or_else(invalid)?;
        date.validate().map_err(|_| invalid())?;
        return Ok(date);
    }

    Err(invalid())
}

/// Map a layout's captures onto calendar fields.
fn extract(caps: &Captures<'_>) -> Option<CalendarTime> {
    let field = |name: &str| caps.name(name).map(|m| m.as_str());
    let year: u16 = field("year")?.parse().ok()?;
    let month: u8 = field("month")?.parse().ok()?;
    let day: u8 = field("day")?.parse().ok()?;

    let hour: u8 = match field("hour") {
        Some(h) => h.parse().ok()?,
        None => return Some(CalendarTime::from_ymd(year, month, day)),
    };
    let minute: u8 = field("minute")?.parse().ok()?;
    let second: u8 = field("second").map_or(Ok(0), str::parse).ok()?;
    let microsecond = field("frac").map_or(0, fraction_to_microseconds);

    let mut date = CalendarTime::new(year, month, day, hour, minute, second)
        .with_microsecond(microsecond);
    if let Some(tz) = field("tz") {
        date = date.with_offset(parse_offset(tz)?);
    }
    Some(date)
}

/// Scale a decimal seconds fraction to microseconds.
///
/// `.123` → 123 000 µs, `.12` → 120 000 µs. Digits beyond microsecond
/// resolution are truncated.
fn fraction_to_microseconds(frac: &str) -> u32 {
    let digits = &frac[..frac.len().min(6)];
    let Ok(value) = digits.parse::<u32>() else {
        return 0;
    };
    value * 10u32.pow(6 - digits.len() as u32)
}

/// Parse a `Z` / `±HHMM` / `±HH:MM` suffix into a fixed offset.
fn parse_offset(tz: &str) -> Option<UtcOffset> {
    if tz == "Z" {
        return Some(UtcOffset::UTC);
    }

    let (sign, rest) = match tz.split_at_checked(1)? {
        ("+", rest) => (1i16, rest),
        ("-", rest) => (-1i16, rest),
        _ => return None,
    };
    let rest = rest.replace(':', "");
    if rest.len() != 4 {
        return None;
    }
    let hours: i16 = rest[..2].parse().ok()?;
    let minutes: i16 = rest[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(UtcOffset::from_minutes(sign * (hours * 60 + minutes)))
}
