//! Chinese zodiac with a fixed February 4 new-year cutover.

use chrono::{Datelike, NaiveDate};
use concordia_types::{
    parse_iso_date, ChineseAnimal, ChineseElement, ChineseSign, InputError, Polarity,
};

/// Approximate Lichun: dates before February 4 belong to the previous year.
pub fn effective_year(date: NaiveDate) -> i32 {
    if (date.month(), date.day()) < (2, 4) {
        date.year() - 1
    } else {
        date.year()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseZodiacCalculator;

impl ChineseZodiacCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn sign(&self, date: NaiveDate) -> ChineseSign {
        let year = effective_year(date);
        ChineseSign {
            animal: ChineseAnimal::from_index((year - 1900).rem_euclid(12) as usize),
            element: ChineseElement::from_year(year),
            polarity: Polarity::from_year(year),
            effective_year: year,
        }
    }
}

pub fn calculate_chinese_sign(birth_date_iso: &str) -> Result<ChineseSign, InputError> {
    let date = parse_iso_date(birth_date_iso)?;
    Ok(ChineseZodiacCalculator::new().sign(date))
}
