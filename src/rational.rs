//! Exact fraction arithmetic on integer numerator/denominator pairs.
//!
//! Translations of symmetry operations are carried as integers over a common
//! denominator so that composition and comparison never touch floating point.
//! A [`Fraction`] is a plain `(numerator, denominator)` tuple; every function
//! here returns it in lowest terms with a positive denominator.

/// `(numerator, denominator)` with a non-zero denominator
pub type Fraction = (i64, i64);

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Least common multiple, always non-negative. Zero if either argument is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Lowest terms with a positive denominator.
pub fn reduce(numerator: i64, denominator: i64) -> Fraction {
    debug_assert!(denominator != 0, "fraction with zero denominator");
    let divisor = gcd(numerator, denominator);
    let (mut n, mut d) = (numerator / divisor, denominator / divisor);
    if d < 0 {
        n = -n;
        d = -d;
    }
    (n, d)
}

/// Sum of two fractions, reduced.
pub fn add(a: Fraction, b: Fraction) -> Fraction {
    let (n1, d1) = a;
    let (n2, d2) = b;
    let common = lcm(d1, d2);
    reduce(n1 * (common / d1) + n2 * (common / d2), common)
}

/// Left fold of [`add`] over `terms`. An empty slice sums to `(0, 1)`.
pub fn sum_fractions(terms: &[Fraction]) -> Fraction {
    terms.iter().fold((0, 1), |acc, &term| add(acc, term))
}

/// Reduce every fraction of a slice.
pub fn reduce_all(fractions: &[Fraction]) -> Vec<Fraction> {
    fractions.iter().map(|&(n, d)| reduce(n, d)).collect()
}

/// Slot-wise sum of equally long fraction vectors: `result[i] = Σ addends[k][i]`.
///
/// Panics if the addends differ in length.
pub fn sum_fractions_elementwise(addends: &[&[Fraction]]) -> Vec<Fraction> {
    let Some(first) = addends.first() else {
        return Vec::new();
    };
    let width = first.len();
    assert!(
        addends.iter().all(|terms| terms.len() == width),
        "elementwise fraction sum over vectors of unequal length"
    );

    (0..width)
        .map(|slot| {
            let column: Vec<Fraction> = addends.iter().map(|terms| terms[slot]).collect();
            sum_fractions(&column)
        })
        .collect()
}

/// Fractional part in `[0, 1)`, reduced.
pub fn wrap_unit(numerator: i64, denominator: i64) -> Fraction {
    let (n, d) = reduce(numerator, denominator);
    (n.rem_euclid(d), d)
}

/// Express fractions over their least common denominator.
/// Returns the scaled numerators and that denominator (1 for an empty slice).
pub fn common_denominator(fractions: &[Fraction]) -> (Vec<i64>, i64) {
    let reduced = reduce_all(fractions);
    let denominator = reduced.iter().fold(1, |acc, &(_, d)| lcm(acc, d));
    let numerators = reduced
        .iter()
        .map(|&(n, d)| n * (denominator / d))
        .collect();
    (numerators, denominator)
}

/// Canonical translation: every component wrapped into `[0, 1)`, expressed over
/// the smallest shared denominator. The zero translation is `([0, 0, 0], 1)`.
pub fn normalize_translation(components: [Fraction; 3]) -> ([i64; 3], i64) {
    let wrapped = components.map(|(n, d)| wrap_unit(n, d));
    let (numerators, denominator) = common_denominator(&wrapped);
    let divisor = numerators
        .iter()
        .fold(denominator, |acc, &n| gcd(acc, n));
    (
        [
            numerators[0] / divisor,
            numerators[1] / divisor,
            numerators[2] / divisor,
        ],
        denominator / divisor,
    )
}

pub fn to_f64(fraction: Fraction) -> f64 {
    fraction.0 as f64 / fraction.1 as f64
}
