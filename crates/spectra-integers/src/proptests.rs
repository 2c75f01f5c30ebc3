//! Property-based tests for exact scalars and prime-field residues.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, PrimeField, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().expect("non-zero rational is invertible");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_display_parses_back(a in rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        #[test]
        fn rational_denominator_positive(a in rational()) {
            prop_assert!(!a.denominator().is_negative());
            prop_assert!(!a.denominator().is_zero());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn residues_lift_symmetrically(n in -5000i64..5000i64) {
            let field = PrimeField::new(1_000_000_007);
            let lifted = field.symmetric(field.reduce(&Integer::new(n)));
            prop_assert_eq!(lifted.to_i64(), Some(n));
        }

        #[test]
        fn fermat_little_theorem(a in 1u64..1_000_000u64) {
            let field = PrimeField::new(998_244_353);
            prop_assert_eq!(field.pow(a, 998_244_352), 1);
        }

        #[test]
        fn field_inverse(a in 1u64..1_000_000u64) {
            let field = PrimeField::new(2_305_843_009_213_693_951);
            let inv = field.inv(a).expect("non-zero residue is invertible");
            prop_assert_eq!(field.mul(a, inv), 1);
        }
    }
}
