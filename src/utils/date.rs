//! UTC calendar dates without timezone dependencies.
//!
//! Only what the generated file header needs: today's date, parsing a pinned
//! date from the CLI and formatting as `YYYY/MM/DD`.
//!
//! # Examples
//!
//! ```ignore
//! let date = DateUtc::parse("2024-06-15").unwrap();
//! assert_eq!(date.to_slash(), "2024/06/15");
//! ```

use anyhow::{Result, bail};
use std::str::FromStr;
use std::time::SystemTime;

/// UTC calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DateUtc {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Current date in UTC.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Civil date of a unix timestamp (days-from-civil inverse).
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn from_unix_secs(secs: u64) -> Self {
        let z = (secs / 86_400) as i64 + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as u16;
        Self { year, month, day }
    }

    /// Parse from "YYYY-MM-DD" or "YYYY/MM/DD".
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 {
            return None;
        }
        let sep = bytes[4];
        if !(sep == b'-' || sep == b'/') || bytes[7] != sep {
            return None;
        }

        let year = s.get(0..4)?.parse().ok()?;
        let month = s.get(5..7)?.parse().ok()?;
        let day = s.get(8..10)?.parse().ok()?;

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(self) -> Result<()> {
        let Self { year, month, day } = self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            bail!("day is invalid: {day}");
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

    /// Format as `YYYY/MM/DD`.
    pub fn to_slash(self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateUtc {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("`{s}` is not a valid YYYY-MM-DD date"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_secs() {
        assert_eq!(DateUtc::from_unix_secs(0), DateUtc::from_ymd(1970, 1, 1));
        // 2000-02-29T12:00:00Z
        assert_eq!(
            DateUtc::from_unix_secs(951_825_600),
            DateUtc::from_ymd(2000, 2, 29)
        );
        // 2024-12-31T23:59:59Z
        assert_eq!(
            DateUtc::from_unix_secs(1_735_689_599),
            DateUtc::from_ymd(2024, 12, 31)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(DateUtc::parse("2024-06-15"), Some(DateUtc::from_ymd(2024, 6, 15)));
        assert_eq!(DateUtc::parse("2024/06/15"), Some(DateUtc::from_ymd(2024, 6, 15)));
        assert_eq!(DateUtc::parse("2024-06/15"), None);
        assert_eq!(DateUtc::parse("2024-13-01"), None);
        assert_eq!(DateUtc::parse("2023-02-29"), None);
        assert_eq!(DateUtc::parse("2024-2-9"), None);
    }

    #[test]
    fn test_from_str_reports_input() {
        assert_eq!("2024-06-15".parse(), Ok(DateUtc::from_ymd(2024, 6, 15)));
        let err = "tomorrow".parse::<DateUtc>().unwrap_err();
        assert!(err.contains("`tomorrow`"));
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(DateUtc::from_ymd(2020, 1, 8).to_slash(), "2020/01/08");
    }

    #[test]
    fn test_today_is_valid() {
        assert!(DateUtc::today().validate().is_ok());
    }
}
