//! Calendar-based pillars: the Mayan Tzolk'in and the Chinese zodiac.
//! Both are pure functions of the birth date.

pub mod chinese;
pub mod tzolkin;

pub use chinese::{calculate_chinese_sign, effective_year, ChineseZodiacCalculator};
pub use tzolkin::{calculate_mayan_sign, gregorian_to_jdn, MayanDaySignCalculator, GMT_CORRELATION};
