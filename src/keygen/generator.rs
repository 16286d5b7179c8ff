//! Generator selection by brute-force point enumeration

use log::debug;
use rand::Rng;

use super::draw_scalar;
use crate::crypto::{Curve, CurvePoint};
use crate::error::{EccError, Result};

/// All affine points with x in `[1, p - 1]`, in order of x, the root
/// `(y^2)^((p + 1) / 4)` before its negation.
pub fn curve_points(curve: &Curve) -> Vec<CurvePoint> {
    let f = curve.field();
    let mut points = Vec::new();

    for x in 1..curve.p() {
        let y2 = curve.rhs(x);
        if f.is_quadratic_residue(y2) {
            let y = f.sqrt(y2);
            points.push(CurvePoint::affine(x, y));
            points.push(CurvePoint::affine(x, f.neg(y)));
        }
    }

    points
}

/// Pick a random curve point to act as generator.
///
/// All enumerated points are assumed to lie in one cyclic subgroup; the curve
/// parameters are not checked for it.
pub fn choose_generator<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> Result<CurvePoint> {
    let candidates = curve_points(curve);
    if candidates.is_empty() {
        return Err(EccError::EmptyCandidateSet {
            p: curve.p(),
            a: curve.a(),
            b: curve.b(),
        });
    }

    let f = curve.field();
    let r1 = draw_scalar(rng, f) as u128;
    let r2 = draw_scalar(rng, f) as u128;
    let index = ((r1 * r2) % candidates.len() as u128) as usize;

    let generator = candidates[index];
    debug!(
        "Generator: {} (candidate {} of {})",
        generator,
        index,
        candidates.len()
    );
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_curve_points_order() {
        let curve = Curve::new(11, 1, 6).unwrap();
        let points = curve_points(&curve);
        let expected: Vec<CurvePoint> = [
            (2, 4), (2, 7), (3, 5), (3, 6), (5, 9), (5, 2),
            (7, 9), (7, 2), (8, 3), (8, 8), (10, 9), (10, 2),
        ]
        .iter()
        .map(|&(x, y)| CurvePoint::affine(x, y))
        .collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_generator_is_on_curve() {
        let curve = Curve::new(11, 1, 6).unwrap();
        let points = curve_points(&curve);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = choose_generator(&curve, &mut rng).unwrap();
            assert!(curve.is_on_curve(&g));
            assert!(points.contains(&g));
        }
    }

    #[test]
    fn test_empty_candidate_set() {
        // y^2 = x^3 + 1 over GF(3): x = 1 gives 2, x = 2 gives 0; neither
        // is a residue.
        let curve = Curve::new(3, 0, 1).unwrap();
        assert!(curve_points(&curve).is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_generator(&curve, &mut rng),
            Err(EccError::EmptyCandidateSet { p: 3, a: 0, b: 1 })
        );
    }
}
