//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// A float in `[0, max)`, spread evenly instead of clustering around the extremes like `f64::arbitrary`
#[must_use]
pub fn bounded_non_negative_float(gen: &mut quickcheck::Gen, max: f64) -> f64 {
    let fraction = u32::arbitrary(gen) as f64 / (u32::MAX as f64 + 1.0);
    fraction * max
}

/// A float in `(0, max]`
#[must_use]
pub fn bounded_positive_float(gen: &mut quickcheck::Gen, max: f64) -> f64 {
    let float = max - bounded_non_negative_float(gen, max);
    // guard against rounding making the subtraction exactly zero for tiny fractions
    if float <= 0.0 {
        max
    } else {
        float
    }
}

/// Image side length in `1..=max`, small enough to keep blur-heavy property tests fast
#[must_use]
pub fn small_dimension(gen: &mut quickcheck::Gen, max: u32) -> u32 {
    u32::arbitrary(gen) % max + 1
}

#[must_use]
pub fn sample(gen: &mut quickcheck::Gen) -> u8 {
    u8::arbitrary(gen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut gen = quickcheck::Gen::new(100);
        for _ in 0..1000 {
            let positive = bounded_positive_float(&mut gen, 8.0);
            assert!(positive > 0.0 && positive <= 8.0);
            let non_negative = bounded_non_negative_float(&mut gen, 100.0);
            assert!((0.0..100.0).contains(&non_negative));
            let side = small_dimension(&mut gen, 16);
            assert!((1..=16).contains(&side));
        }
    }
}
