//! Small random perturbations for numeric columns.

use rand::Rng;

/// Adds a uniform offset from {-1, 0, +1} to an integer value.
pub fn shift_integer<R: Rng + ?Sized>(value: i64, rng: &mut R) -> i64 {
    value + rng.gen_range(-1..=1)
}

/// Adds a uniform offset from [-0.25, +0.25] to a float value.
pub fn shift_float<R: Rng + ?Sized>(value: f64, rng: &mut R) -> f64 {
    value + rng.gen_range(-0.25..=0.25)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn integer_offset_stays_within_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let shifted = shift_integer(100, &mut rng);
            assert!((99..=101).contains(&shifted));
        }
    }

    #[test]
    fn integer_offset_hits_all_three_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(shift_integer(0, &mut rng));
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![-1, 0, 1]);
    }

    #[test]
    fn float_offset_stays_within_quarter() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let shifted = shift_float(3.5, &mut rng);
            assert!((3.25..=3.75).contains(&shifted));
        }
    }
}
