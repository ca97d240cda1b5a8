//! Property-based tests for the exact fraction helpers.

use magnetic_space_groups::rational::{
    common_denominator, gcd, lcm, normalize_translation, reduce, sum_fractions, wrap_unit,
};
use proptest::prelude::*;

fn fraction() -> impl Strategy<Value = (i64, i64)> {
    (-1000i64..1000, prop_oneof![1i64..50, -50i64..-1])
}

proptest! {
    /// gcd divides both arguments and is never negative.
    #[test]
    fn gcd_divides_both(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let g = gcd(a, b);
        prop_assert!(g >= 0);
        if g != 0 {
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }

    /// lcm is a common multiple.
    #[test]
    fn lcm_is_common_multiple(a in 1i64..1000, b in 1i64..1000) {
        let l = lcm(a, b);
        prop_assert_eq!(l % a, 0);
        prop_assert_eq!(l % b, 0);
        prop_assert_eq!(l * gcd(a, b), a * b);
    }

    /// Reduced fractions keep their value and have a positive, coprime denominator.
    #[test]
    fn reduce_preserves_value((n, d) in fraction()) {
        let (rn, rd) = reduce(n, d);
        prop_assert!(rd > 0);
        prop_assert_eq!(gcd(rn, rd), if rn == 0 { rd } else { 1 });
        prop_assert_eq!(rn * d, n * rd);
    }

    /// Summation order does not change the reduced result.
    #[test]
    fn sum_is_order_independent(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(sum_fractions(&[a, b, c]), sum_fractions(&[c, a, b]));
        prop_assert_eq!(sum_fractions(&[a, b, c]), sum_fractions(&[b, c, a]));
    }

    /// Wrapped fractions lie in [0, 1) and differ from the input by an integer.
    #[test]
    fn wrap_unit_stays_in_cell((n, d) in fraction()) {
        let (wn, wd) = wrap_unit(n, d);
        prop_assert!(wn >= 0 && wn < wd);
        let (_, difference_denominator) = sum_fractions(&[(n, d), (-wn, wd)]);
        prop_assert_eq!(difference_denominator, 1);
    }

    /// Common-denominator form keeps every value.
    #[test]
    fn common_denominator_preserves_values(a in fraction(), b in fraction(), c in fraction()) {
        let inputs = [a, b, c];
        let (numerators, denominator) = common_denominator(&inputs);
        prop_assert!(denominator > 0);
        for (&(n, d), &scaled) in inputs.iter().zip(&numerators) {
            prop_assert_eq!(reduce(scaled, denominator), reduce(n, d));
        }
    }

    /// Canonical translations are invariant under lattice shifts.
    #[test]
    fn normalized_translation_ignores_lattice_shifts(
        a in fraction(), b in fraction(), c in fraction(),
        shift in -5i64..5,
    ) {
        let shifted = [(a.0 + shift * a.1, a.1), b, (c.0 - shift * c.1, c.1)];
        prop_assert_eq!(normalize_translation([a, b, c]), normalize_translation(shifted));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(sum_fractions(&[(1, 2), (1, 3)]), (5, 6));
    assert_eq!(reduce(10, 4), (5, 2));
}
