use concordia_types::{
    AstrologyProfile, Body, CelestialBody, ElementBalance, ModalityBalance, ZodiacSign,
};

pub const EMERGENCY: &str = "emergency";

/// Last-resort chart: every body at 0° Aries in house 1, balances flat.
pub fn emergency_profile() -> AstrologyProfile {
    let at_origin = |body: Body| CelestialBody::new(body, 0.0, 1, false);
    let mut houses = [0.0; 12];
    for (i, cusp) in houses.iter_mut().enumerate() {
        *cusp = 30.0 * i as f64;
    }

    AstrologyProfile {
        sun: at_origin(Body::Sun),
        moon: at_origin(Body::Moon),
        rising: at_origin(Body::Ascendant),
        midheaven: at_origin(Body::Midheaven),
        planets: Body::PLANETS.iter().map(|&b| at_origin(b)).collect(),
        houses,
        house_system: EMERGENCY.to_string(),
        elements: ElementBalance::uniform(),
        modalities: ModalityBalance {
            cardinal: 34,
            fixed: 33,
            mutable: 33,
        },
        sun_sign: ZodiacSign::Aries,
        moon_sign: ZodiacSign::Aries,
        rising_sign: ZodiacSign::Aries,
    }
}
