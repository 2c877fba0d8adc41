//! Property tests for the algebraic laws of the fit-vector operations.

use fitvec::FuzzyVector;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// Strategy: membership values in [0, 1]
fn arb_fits() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..=1.0f64, 1..32)
}

// Strategy: two fit vectors of equal length
fn arb_fit_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..32).prop_flat_map(|len| {
        (
            prop::collection::vec(0.0..=1.0f64, len),
            prop::collection::vec(0.0..=1.0f64, len),
        )
    })
}

fn approx_eq(a: &FuzzyVector, b: &FuzzyVector) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
}

proptest! {
    #[test]
    fn prop_double_complement_is_identity(fits in arb_fits()) {
        let a = FuzzyVector::new(fits).unwrap();
        prop_assert!(approx_eq(&a.complement().complement(), &a));
    }

    #[test]
    fn prop_union_commutes((lhs, rhs) in arb_fit_pair()) {
        let a = FuzzyVector::new(lhs).unwrap();
        let b = FuzzyVector::new(rhs).unwrap();
        prop_assert!(approx_eq(&a.union(&b).unwrap(), &b.union(&a).unwrap()));
    }

    #[test]
    fn prop_intersection_commutes((lhs, rhs) in arb_fit_pair()) {
        let a = FuzzyVector::new(lhs).unwrap();
        let b = FuzzyVector::new(rhs).unwrap();
        prop_assert!(approx_eq(
            &a.intersection(&b).unwrap(),
            &b.intersection(&a).unwrap()
        ));
    }

    #[test]
    fn prop_operations_stay_in_unit_interval((lhs, rhs) in arb_fit_pair()) {
        let a = FuzzyVector::new(lhs).unwrap();
        let b = FuzzyVector::new(rhs).unwrap();

        for v in [a.union(&b).unwrap(), a.intersection(&b).unwrap(), a.complement()] {
            prop_assert!(v.iter().all(|x| (0.0..=1.0).contains(&x)));
        }
    }

    #[test]
    fn prop_self_distance_is_zero(fits in arb_fits()) {
        let a = FuzzyVector::new(fits).unwrap();
        prop_assert_eq!(a.distance(&a).unwrap(), 0.0);
    }

    #[test]
    fn prop_distance_is_symmetric((lhs, rhs) in arb_fit_pair()) {
        let a = FuzzyVector::new(lhs).unwrap();
        let b = FuzzyVector::new(rhs).unwrap();
        prop_assert!((a.distance(&b).unwrap() - b.distance(&a).unwrap()).abs() < EPS);
    }

    #[test]
    fn prop_extreme_distance_is_length(len in 1usize..64) {
        let x = FuzzyVector::ones(len);
        let o = FuzzyVector::zeros(len);
        prop_assert!((x.distance(&o).unwrap() - len as f64).abs() < EPS);
    }

    #[test]
    fn prop_self_subsethood_is_one(fits in arb_fits()) {
        let a = FuzzyVector::new(fits).unwrap();
        prop_assume!(a.count().unwrap() > 0.0);
        prop_assert!((a.subsethood(&a).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn prop_subsethood_in_unit_interval((lhs, rhs) in arb_fit_pair()) {
        let a = FuzzyVector::new(lhs).unwrap();
        let b = FuzzyVector::new(rhs).unwrap();
        prop_assume!(a.count().unwrap() > 0.0);
        let s = a.subsethood(&b).unwrap();
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn prop_fuzziness_in_unit_interval(fits in arb_fits()) {
        let a = FuzzyVector::new(fits).unwrap();
        let e = a.fuzziness().unwrap();
        prop_assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn prop_near_far_are_opposite_vertices(fits in arb_fits()) {
        let a = FuzzyVector::new(fits).unwrap();
        let near = a.near();
        let far = a.far();
        for (n, f) in near.iter().zip(far.iter()) {
            prop_assert!(n == 0.0 || n == 1.0);
            prop_assert_eq!(n + f, 1.0);
        }
    }
}
