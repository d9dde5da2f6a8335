//! Scalar candidates
//!
//! A candidate is a single `f64` inside the run's [`Bounds`]. Operators never
//! modify one in place; they return a new value.

use rand::Rng;

use crate::genome::bounds::Bounds;

/// A single real-valued point in the search domain
pub type Candidate = f64;

/// Produce a uniformly random candidate inside `bounds`
pub fn make_individual<R: Rng>(bounds: &Bounds, rng: &mut R) -> Candidate {
    bounds.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_make_individual_in_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::default_domain();
        for _ in 0..500 {
            let x = make_individual(&bounds, &mut rng);
            assert!(bounds.contains(x));
        }
    }

    #[test]
    fn test_make_individual_consumes_one_draw() {
        let bounds = Bounds::default_domain();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        let _ = make_individual(&bounds, &mut a);
        let _: f64 = b.gen_range(bounds.min..=bounds.max);

        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
