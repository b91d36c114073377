//! Weighted element and modality percentages.

use concordia_types::{Body, ElementBalance, Modality, ModalityBalance, ZodiacSign, Element};

/// Round each share to a whole percent, then push the rounding remainder onto
/// the largest bucket (first one wins a tie) so the result sums to 100.
pub fn percentages<const N: usize>(weights: [u32; N]) -> [i32; N] {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        let mut even = [(100 / N) as i32; N];
        even[0] += 100 - (100 / N as i32) * N as i32;
        return even;
    }

    let mut out = [0i32; N];
    for (slot, weight) in out.iter_mut().zip(weights) {
        *slot = (weight as f64 / total as f64 * 100.0).round() as i32;
    }

    let diff = 100 - out.iter().sum::<i32>();
    if diff != 0 {
        let mut largest = 0;
        for i in 1..N {
            if out[i] > out[largest] {
                largest = i;
            }
        }
        out[largest] += diff;
    }
    out
}

/// Tally placements (body, sign) into element percentages.
pub fn element_balance(placements: &[(Body, ZodiacSign)]) -> ElementBalance {
    let mut weights = [0u32; 4];
    for (body, sign) in placements {
        let idx = Element::CYCLE
            .iter()
            .position(|e| *e == sign.element())
            .unwrap_or(0);
        weights[idx] += body.balance_weight();
    }
    let [fire, earth, air, water] = percentages(weights);
    ElementBalance {
        fire,
        earth,
        air,
        water,
    }
}

pub fn modality_balance(placements: &[(Body, ZodiacSign)]) -> ModalityBalance {
    let mut weights = [0u32; 3];
    for (body, sign) in placements {
        let idx = Modality::CYCLE
            .iter()
            .position(|m| *m == sign.modality())
            .unwrap_or(0);
        weights[idx] += body.balance_weight();
    }
    let [cardinal, fixed, mutable] = percentages(weights);
    ModalityBalance {
        cardinal,
        fixed,
        mutable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_exact() {
        assert_eq!(percentages([1u32, 1, 1, 1]), [25, 25, 25, 25]);
    }

    #[test]
    fn test_percentages_remainder_goes_to_largest() {
        // 33.3 each rounds to 33; the first bucket absorbs the extra point
        assert_eq!(percentages([1u32, 1, 1]), [34, 33, 33]);
        // 7/22=31.8->32, 8/22=36.4->36, 4/22=18.2->18, 3/22=13.6->14 => 100
        assert_eq!(percentages([7u32, 8, 4, 3]), [32, 36, 18, 14]);
    }

    #[test]
    fn test_percentages_overshoot_taken_from_largest() {
        // 1/6=16.7->17, 5/6=83.3->83: sums to 100 already
        assert_eq!(percentages([1u32, 5]), [17, 83]);
        // 1/8 -> 12.5 -> 13 (x4) = 52, 4/8 -> 50: 102, largest absorbs -2
        assert_eq!(percentages([1u32, 1, 1, 1, 4]), [13, 13, 13, 13, 48]);
    }

    #[test]
    fn test_percentages_zero_total() {
        assert_eq!(percentages([0u32; 4]), [25, 25, 25, 25]);
        assert_eq!(percentages([0u32; 3]), [34, 33, 33]);
    }

    #[test]
    fn test_element_balance_weights() {
        let placements = [
            (Body::Sun, ZodiacSign::Leo),
            (Body::Moon, ZodiacSign::Cancer),
            (Body::Ascendant, ZodiacSign::Virgo),
        ];
        // fire 4, earth 3, water 4 of 11
        let balance = element_balance(&placements);
        assert_eq!(balance.total(), 100);
        assert_eq!(balance.air, 0);
        assert_eq!(balance.earth, 27);
    }
}
