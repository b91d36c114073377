//! Numerology calculator.
//!
//! Reduction halts at the master numbers 11, 22 and 33. Challenge nodes of the
//! pinnacle pyramid are raw absolute differences and are never reduced.

pub mod calculator;
pub mod letters;
pub mod pyramid;
pub mod reduce;

pub use calculator::{calculate_numerology, NumerologyCalculator};
pub use pyramid::pinnacle_pyramid;
pub use reduce::{digit_sum, digital_root, is_master, reduce, MASTER_NUMBERS};
