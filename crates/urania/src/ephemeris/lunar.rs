//! Geocentric Moon from the principal terms of the ELP-2000 series (Meeus ch. 47).

use super::types::Vector3;

const KM_PER_AU: f64 = 149_597_870.7;

// (coefficient in degrees, D, M, M', F)
const LONGITUDE_TERMS: &[(f64, f64, f64, f64, f64)] = &[
    (6.288_774, 0.0, 0.0, 1.0, 0.0),
    (1.274_027, 2.0, 0.0, -1.0, 0.0),
    (0.658_314, 2.0, 0.0, 0.0, 0.0),
    (0.213_618, 0.0, 0.0, 2.0, 0.0),
    (-0.185_116, 0.0, 1.0, 0.0, 0.0),
    (-0.114_332, 0.0, 0.0, 0.0, 2.0),
    (0.058_793, 2.0, 0.0, -2.0, 0.0),
    (0.057_066, 2.0, -1.0, -1.0, 0.0),
    (0.053_322, 2.0, 0.0, 1.0, 0.0),
    (0.045_758, 2.0, -1.0, 0.0, 0.0),
    (-0.040_923, 0.0, 1.0, -1.0, 0.0),
    (-0.034_720, 1.0, 0.0, 0.0, 0.0),
    (-0.030_383, 0.0, 1.0, 1.0, 0.0),
];

const LATITUDE_TERMS: &[(f64, f64, f64, f64, f64)] = &[
    (5.128_122, 0.0, 0.0, 0.0, 1.0),
    (0.280_602, 0.0, 0.0, 1.0, 1.0),
    (0.277_693, 0.0, 0.0, 1.0, -1.0),
    (0.173_237, 2.0, 0.0, 0.0, -1.0),
];

// (coefficient in km, D, M, M', F), cosine terms
const DISTANCE_TERMS: &[(f64, f64, f64, f64, f64)] = &[
    (-20_905.355, 0.0, 0.0, 1.0, 0.0),
    (-3_699.111, 2.0, 0.0, -1.0, 0.0),
    (-2_955.968, 2.0, 0.0, 0.0, 0.0),
    (-569.925, 0.0, 0.0, 2.0, 0.0),
];

struct Arguments {
    mean_lon: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        Self {
            mean_lon: 218.316_447_7 + 481_267.881_234_21 * t,
            d: 297.850_192_1 + 445_267.111_403_4 * t,
            m: 357.529_109_2 + 35_999.050_290_9 * t,
            mp: 134.963_396_4 + 477_198.867_505_5 * t,
            f: 93.272_095_0 + 483_202.017_523_3 * t,
        }
    }

    fn angle(&self, term: &(f64, f64, f64, f64, f64)) -> f64 {
        (term.1 * self.d + term.2 * self.m + term.3 * self.mp + term.4 * self.f).to_radians()
    }
}

/// Geocentric ecliptic longitude, latitude (deg) and distance (km).
pub fn lunar_coordinates(t: f64) -> (f64, f64, f64) {
    let args = Arguments::at(t);
    let lon = args.mean_lon
        + LONGITUDE_TERMS
            .iter()
            .map(|term| term.0 * args.angle(term).sin())
            .sum::<f64>();
    let lat = LATITUDE_TERMS
        .iter()
        .map(|term| term.0 * args.angle(term).sin())
        .sum::<f64>();
    let dist = 385_000.56
        + DISTANCE_TERMS
            .iter()
            .map(|term| term.0 * args.angle(term).cos())
            .sum::<f64>();
    (concordia_types::normalize_degrees(lon), lat, dist)
}

/// Geocentric ecliptic vector of the Moon in AU.
pub fn geocentric_ecliptic(t: f64) -> Vector3 {
    let (lon, lat, dist_km) = lunar_coordinates(t);
    let r = dist_km / KM_PER_AU;
    let (sl, cl) = lon.to_radians().sin_cos();
    let (sb, cb) = lat.to_radians().sin_cos();
    Vector3::new(r * cb * cl, r * cb * sl, r * sb)
}
