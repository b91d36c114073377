use crate::letters::{name_sum, vowel_sum};
use crate::pyramid::pinnacle_pyramid;
use crate::reduce::{digit_sum, reduce};
use chrono::{Datelike, NaiveDate};
use concordia_types::{parse_iso_date, InputError, NumerologyProfile};

/// Stateless numerology calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumerologyCalculator;

impl NumerologyCalculator {
    pub fn new() -> Self {
        Self
    }

    /// reduce(day + month + digitSum(year))
    pub fn life_path(&self, date: NaiveDate) -> u32 {
        reduce(date.day() + date.month() + digit_sum(year_of(date)))
    }

    pub fn destiny(&self, name: &str) -> Option<u32> {
        name_sum(name).map(reduce)
    }

    pub fn soul_urge(&self, name: &str) -> Option<u32> {
        vowel_sum(name).map(reduce)
    }

    pub fn pinnacles(&self, date: NaiveDate) -> [u32; 4] {
        let (m, d) = (date.month(), date.day());
        let y = reduce(year_of(date));
        let p1 = reduce(m + d);
        let p2 = reduce(d + y);
        [p1, p2, reduce(p1 + p2), reduce(m + y)]
    }

    pub fn profile(&self, date: NaiveDate, name: &str) -> NumerologyProfile {
        let profile = NumerologyProfile {
            life_path_number: self.life_path(date),
            destiny_number: self.destiny(name),
            soul_urge_number: self.soul_urge(name),
            pinnacles: self.pinnacles(date),
            pinnacle_pyramid: pinnacle_pyramid(date.month(), date.day(), year_of(date)),
        };
        log::debug!(
            "numerology for {}: life path {}",
            date,
            profile.life_path_number
        );
        profile
    }
}

// Proleptic years <= 0 count as BCE years (0 is 1 BCE) so the year digits are never all zero.
fn year_of(date: NaiveDate) -> u32 {
    match date.year() {
        y if y > 0 => y.unsigned_abs(),
        y => (1 - y).unsigned_abs(),
    }
}

/// Numerology for an ISO birth date (`YYYY-MM-DD`) and full name.
pub fn calculate_numerology(
    birth_date_iso: &str,
    name: &str,
) -> Result<NumerologyProfile, InputError> {
    let date = parse_iso_date(birth_date_iso)?;
    Ok(NumerologyCalculator::new().profile(date, name))
}
