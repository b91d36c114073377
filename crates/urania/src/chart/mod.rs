pub mod balance;
pub mod builder;
pub mod emergency;
pub mod professional;

pub use balance::{element_balance, modality_balance, percentages};
pub use builder::{assemble_profile, whole_sign_cusps, whole_sign_house, ChartBuilder, WHOLE_SIGN};
pub use emergency::{emergency_profile, EMERGENCY};
pub use professional::{house_from_cusps, ProfessionalChart, ProfessionalHouse, ProfessionalPlanet, RetroFlag};
