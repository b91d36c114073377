use crate::calendar::{ChineseSign, MayanDaySign};
use crate::numerology::NumerologyProfile;
use crate::profile::AstrologyProfile;
use serde::{Deserialize, Serialize};

/// The four computed pillars for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPillars {
    pub astrology: AstrologyProfile,
    pub numerology: NumerologyProfile,
    pub mayan: MayanDaySign,
    pub chinese: ChineseSign,
}
