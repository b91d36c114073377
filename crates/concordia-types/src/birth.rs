//! Birth data parsing and local-to-UTC conversion.

use crate::error::InputError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref ISO_DATE: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:T[0-9:.+\-Z]*)?$").unwrap();
    static ref HH_MM: Regex = Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").unwrap();
}

/// Geographic coordinates in degrees (east and north positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, InputError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InputError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InputError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// Validated birth data: local civil date and time plus the place's UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoPoint,
    pub utc_offset_hours: f64,
}

impl BirthData {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        location: GeoPoint,
        utc_offset_hours: f64,
    ) -> Result<Self, InputError> {
        if !utc_offset_hours.is_finite() || !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(InputError::OffsetOutOfRange(utc_offset_hours));
        }
        Ok(Self {
            date,
            time,
            location,
            utc_offset_hours,
        })
    }

    /// Parse the raw collaborator inputs `(birthDateISO, birthTimeHHmm, lat, lng, offset)`.
    pub fn parse(
        date_iso: &str,
        time_hhmm: &str,
        lat: f64,
        lng: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, InputError> {
        let date = parse_iso_date(date_iso)?;
        let time = parse_hhmm(time_hhmm)?;
        let location = GeoPoint::new(lat, lng)?;
        Self::new(date, time, location, utc_offset_hours)
    }

    /// The birth moment as a UTC instant: local time minus the offset.
    pub fn utc_instant(&self) -> Result<DateTime<Utc>, InputError> {
        let local = self.date.and_time(self.time);
        let offset_minutes = (self.utc_offset_hours * 60.0).round() as i64;
        let naive_utc = local
            .checked_sub_signed(Duration::minutes(offset_minutes))
            .ok_or_else(|| InputError::UnrepresentableInstant {
                local: local.to_string(),
                offset: self.utc_offset_hours,
            })?;
        Ok(Utc.from_utc_datetime(&naive_utc))
    }
}

/// Parse an ISO `YYYY-MM-DD` date. A trailing `T...` time part is tolerated and ignored.
/// Year 0000 has no calendar meaning and is rejected.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, InputError> {
    let invalid = || InputError::InvalidDate {
        input: input.to_string(),
    };
    let caps = ISO_DATE.captures(input.trim()).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    if year == 0 {
        return Err(invalid());
    }
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let day: u32 = caps[3].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a 24h `HH:mm` (optionally `HH:mm:ss`) time.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime, InputError> {
    let invalid = || InputError::InvalidTime {
        input: input.to_string(),
    };
    let caps = HH_MM.captures(input.trim()).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    let second: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("1990-07-29").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1990, 7, 29));
        assert_eq!(parse_iso_date("1990-07-29T10:00:00Z").unwrap(), date);
    }

    #[test]
    fn test_parse_iso_date_rejects_other_formats() {
        for bad in [
            "29/07/1990",
            "1990-7-29",
            "1990-02-30",
            "0000-05-10",
            "",
            "19900729",
            "07-29-1990",
        ] {
            assert!(
                matches!(parse_iso_date(bad), Err(InputError::InvalidDate { .. })),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_parse_hhmm() {
        let time = parse_hhmm("10:00").unwrap();
        assert_eq!((time.hour(), time.minute()), (10, 0));
        assert_eq!(parse_hhmm("7:05").unwrap().minute(), 5);
        assert_eq!(parse_hhmm("23:59:30").unwrap().second(), 30);
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("10h00").is_err());
    }

    #[test]
    fn test_utc_instant_applies_offset() {
        let birth = BirthData::parse("1990-07-29", "10:00", 14.6349, -90.5069, -5.0).unwrap();
        let utc = birth.utc_instant().unwrap();
        assert_eq!(utc.to_rfc3339(), "1990-07-29T15:00:00+00:00");
    }

    #[test]
    fn test_utc_instant_fractional_offset_crosses_midnight() {
        let birth = BirthData::parse("2001-01-01", "02:00", 19.07, 72.87, 5.5).unwrap();
        let utc = birth.utc_instant().unwrap();
        assert_eq!(utc.to_rfc3339(), "2000-12-31T20:30:00+00:00");
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        assert_eq!(
            BirthData::parse("1990-07-29", "10:00", 91.0, 0.0, 0.0),
            Err(InputError::LatitudeOutOfRange(91.0))
        );
        assert!(BirthData::parse("1990-07-29", "10:00", 0.0, 181.0, 0.0).is_err());
        assert!(BirthData::parse("1990-07-29", "10:00", 0.0, 0.0, 15.0).is_err());
    }
}
