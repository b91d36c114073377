//! Tzolk'in day-sign (nawal) and tone.

use chrono::{Datelike, NaiveDate};
use concordia_types::{parse_iso_date, InputError, MayanDaySign, Nawal};

/// Goodman-Martinez-Thompson correlation: JDN 584283 is 4 Ajpu.
pub const GMT_CORRELATION: i64 = 584_283;

/// Julian Day Number of a proleptic Gregorian date.
pub fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MayanDaySignCalculator;

impl MayanDaySignCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn day_sign(&self, date: NaiveDate) -> MayanDaySign {
        let jdn = gregorian_to_jdn(date.year() as i64, date.month() as i64, date.day() as i64);
        let days = jdn - GMT_CORRELATION;

        let tone = ((days + 3).rem_euclid(13) + 1) as u8;
        let nawal = Nawal::from_index((days + 19).rem_euclid(20) as usize);
        // 159 is 3 mod 13 and 19 mod 20, aligning both cycles with 1 Imox = day 1
        let day_number = ((days + 159).rem_euclid(260) + 1) as u16;

        MayanDaySign {
            nawal,
            tone,
            day_number,
        }
    }
}

/// Tzolk'in sign for an ISO birth date.
pub fn calculate_mayan_sign(birth_date_iso: &str) -> Result<MayanDaySign, InputError> {
    let date = parse_iso_date(birth_date_iso)?;
    Ok(MayanDaySignCalculator::new().day_sign(date))
}
