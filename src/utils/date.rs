//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for the two date fields a
//! podcast feed carries: channel build dates and episode publication dates.
//!
//! # Features
//!
//! - ISO 8601 parsing with optional fractional seconds and zone offsets
//! - Offsets normalized to UTC through unix-second arithmetic
//! - RFC 1123 (HTTP-date) formatting for RSS date elements
//! - Leap year handling
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2025-06-17T14:30:00.000Z").unwrap();
//! assert_eq!(dt.to_http_date(), "Tue, 17 Jun 2025 14:30:00 GMT");
//!
//! let dt = DateTimeUtc::parse("2025-06-17T16:30:00+02:00").unwrap();
//! assert_eq!(dt.to_http_date(), "Tue, 17 Jun 2025 14:30:00 GMT");
//! ```

use anyhow::{Result, bail};

const SECS_PER_DAY: i64 = 86_400;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse an ISO 8601 timestamp.
    ///
    /// Accepted shapes:
    /// - `YYYY-MM-DD` (midnight UTC)
    /// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` followed by `Z`, `±HH`, `±HHMM`,
    ///   `±HH:MM` or nothing (read as UTC)
    ///
    /// A single space may stand in for `T`. Fractional seconds are dropped.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        // Parse date part
        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        if !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }

        // Time part: HH:MM[:SS[.fff]]
        let time = &bytes[11..];
        if time.len() < 5 || time[2] != b':' {
            return None;
        }
        let hour = parse_u8(&time[0..2])?;
        let minute = parse_u8(&time[3..5])?;

        let mut pos = 5;
        let mut second = 0;
        if time.get(pos) == Some(&b':') {
            second = parse_u8(time.get(pos + 1..pos + 3)?)?;
            pos += 3;
            if time.get(pos) == Some(&b'.') {
                pos += 1;
                let digits = time[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
                if digits == 0 {
                    return None;
                }
                pos += digits;
            }
        }

        let offset = parse_offset(&time[pos..])?;

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;

        if offset == 0 {
            Some(dt)
        } else {
            Self::from_unix(dt.to_unix() - offset)
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
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

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Seconds since 1970-01-01T00:00:00Z.
    pub fn to_unix(self) -> i64 {
        // Shift the year so it starts in March; Feb 29 becomes the last day.
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y.rem_euclid(400);
        let mp = (i64::from(self.month) + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        let days = era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS;

        days * SECS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Inverse of [`Self::to_unix`]. `None` when the year leaves `0..=65535`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Ranges bounded below
    pub fn from_unix(secs: i64) -> Option<Self> {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);

        let z = days + UNIX_EPOCH_DAYS;
        let era = z.div_euclid(DAYS_PER_ERA);
        let doe = z.rem_euclid(DAYS_PER_ERA);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1; // 1..=31
        let month = if mp < 10 { mp + 3 } else { mp - 9 }; // 1..=12
        let year = yoe + era * 400 + i64::from(month <= 2);

        Some(Self::new(
            u16::try_from(year).ok()?,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            (rem % 3600 / 60) as u8,
            (rem % 60) as u8,
        ))
    }

    /// Format as RFC 1123 / HTTP-date for RSS date elements.
    ///
    /// Returns: `Tue, 17 Jun 2025 14:30:00 GMT`
    pub fn to_http_date(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    #[inline]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        let leap = y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
        ((d + (13 * (m + 1)) / 5 + y + leap).rem_euclid(7)) as usize
    }
}

/// Parse a trailing zone designator into seconds east of UTC.
fn parse_offset(bytes: &[u8]) -> Option<i64> {
    let (sign, rest) = match bytes {
        [] | [b'Z' | b'z'] => return Some(0),
        [b'+', rest @ ..] => (1, rest),
        [b'-', rest @ ..] => (-1, rest),
        _ => return None,
    };

    let (hours, minutes) = match rest {
        [h1, h2] => (parse_u8(&[*h1, *h2])?, 0),
        [h1, h2, m1, m2] | [h1, h2, b':', m1, m2] => {
            (parse_u8(&[*h1, *h2])?, parse_u8(&[*m1, *m2])?)
        }
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(sign * (i64::from(hours) * 3600 + i64::from(minutes) * 60))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
