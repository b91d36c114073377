//! Daily relational volatility from a rotating element of the day.

use chrono::{Datelike, Duration, NaiveDate};
use concordia_types::{AstrologyProfile, Element, Pillar, TimeWindow, WindowType};

pub const DEFAULT_PROJECTION_DAYS: usize = 30;

const FLOW_SCORE: i32 = 85;
const TENSION_SCORE: i32 = 30;
const NEUTRAL_SCORE: i32 = 50;
const LUNAR_ADJUSTMENT: i32 = 10;

pub fn element_of_day(date: NaiveDate) -> Element {
    Element::CYCLE[date.ordinal() as usize % 4]
}

fn favours(person: Element, day: Element) -> bool {
    person == day || person.complements(day)
}

pub fn classify_day(a: Element, b: Element, day: Element) -> WindowType {
    if a.opposes(day) || b.opposes(day) {
        WindowType::Tension
    } else if favours(a, day) && favours(b, day) {
        WindowType::Flow
    } else {
        WindowType::Neutral
    }
}

/// Every seventh day is perturbed: +10 on waxing weeks, -10 on waning ones.
fn lunar_adjustment(index: usize) -> Option<i32> {
    if (index + 1) % 7 != 0 {
        return None;
    }
    Some(if (index / 7) % 2 == 0 {
        LUNAR_ADJUSTMENT
    } else {
        -LUNAR_ADJUSTMENT
    })
}

fn describe(kind: WindowType, day: Element, a: Element, b: Element) -> String {
    match kind {
        WindowType::Flow => format!("{day} day supports both {a} and {b} temperaments"),
        WindowType::Tension => format!("{day} day strains the {a}/{b} pairing"),
        WindowType::Neutral => format!("{day} day is quiet for {a} and {b}"),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemporalProjectionEngine {
    days: usize,
}

impl Default for TemporalProjectionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECTION_DAYS)
    }
}

impl TemporalProjectionEngine {
    pub fn new(days: usize) -> Self {
        Self { days }
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// Windows for `days` consecutive dates; index 0 is `start`.
    pub fn project(
        &self,
        a: &AstrologyProfile,
        b: &AstrologyProfile,
        start: NaiveDate,
    ) -> Vec<TimeWindow> {
        let (ea, eb) = (a.dominant_element(), b.dominant_element());
        (0..self.days)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                let day = element_of_day(date);
                let kind = classify_day(ea, eb, day);
                let base = match kind {
                    WindowType::Flow => FLOW_SCORE,
                    WindowType::Tension => TENSION_SCORE,
                    WindowType::Neutral => NEUTRAL_SCORE,
                };
                let adjustment = lunar_adjustment(i);
                TimeWindow {
                    date,
                    window_type: kind,
                    score: (base + adjustment.unwrap_or(0)).clamp(0, 100) as u8,
                    description: describe(kind, day, ea, eb),
                    affected_pillar: if adjustment.is_some() {
                        Pillar::Mayan
                    } else {
                        Pillar::Western
                    },
                    element_of_day: day,
                }
            })
            .collect()
    }
}
