use almanac::{calculate_chinese_sign, calculate_mayan_sign};
use arithmos::calculate_numerology;
use concordia_types::{BirthData, PersonPillars};
use urania::ChartBuilder;

pub fn pillars(date: &str, time: &str, lat: f64, lng: f64, offset: f64, name: &str) -> PersonPillars {
    let birth = BirthData::parse(date, time, lat, lng, offset).unwrap();
    PersonPillars {
        astrology: ChartBuilder::default().build_for_birth(&birth).unwrap(),
        numerology: calculate_numerology(date, name).unwrap(),
        mayan: calculate_mayan_sign(date).unwrap(),
        chinese: calculate_chinese_sign(date).unwrap(),
    }
}

#[allow(dead_code)]
pub fn alice() -> PersonPillars {
    pillars("1990-07-29", "10:00", 14.6349, -90.5069, -5.0, "Ana María López")
}

#[allow(dead_code)]
pub fn bruno() -> PersonPillars {
    pillars("1987-12-04", "23:15", 40.4168, -3.7038, 1.0, "Bruno Díaz")
}
