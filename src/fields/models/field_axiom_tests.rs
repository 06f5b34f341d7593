//! Ring-axiom, identity, inverse, and squaring properties, written once
//! and instantiated per curve x extension via [`field_axiom_tests`] to
//! avoid duplicating the test bodies for every concrete field type.

macro_rules! field_axiom_tests {
    ($modname:ident, $ty:ty) => {
        paste::paste! {
            #[cfg(test)]
            mod [<$modname _axioms>] {
                use super::*;
                use crate::fields::models::test_rand::TestRand;
                use crate::fields::Field;
                use rand::SeedableRng;
                use rand_xorshift::XorShiftRng;

                fn rng() -> XorShiftRng {
                    XorShiftRng::from_seed([
                        0x5d, 0xbe, 0x62, 0x59, 0x8d, 0x31, 0x3d, 0x76, 0x32, 0x37, 0xdb, 0x17,
                        0xe5, 0xbc, 0x06, 0x54,
                    ])
                }

                fn nonzero(rng: &mut XorShiftRng) -> $ty {
                    loop {
                        let a = <$ty as TestRand>::test_rand(rng);
                        if !a.is_zero().declassify() {
                            return a;
                        }
                    }
                }

                #[test]
                fn addition_is_commutative_and_associative() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = <$ty as TestRand>::test_rand(&mut rng);
                        let b = <$ty as TestRand>::test_rand(&mut rng);
                        let c = <$ty as TestRand>::test_rand(&mut rng);
                        assert_eq!(a + b, b + a);
                        assert_eq!((a + b) + c, a + (b + c));
                    }
                }

                #[test]
                fn multiplication_is_commutative_and_associative() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = <$ty as TestRand>::test_rand(&mut rng);
                        let b = <$ty as TestRand>::test_rand(&mut rng);
                        let c = <$ty as TestRand>::test_rand(&mut rng);
                        assert_eq!(a * b, b * a);
                        assert_eq!((a * b) * c, a * (b * c));
                    }
                }

                #[test]
                fn multiplication_distributes_over_addition() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = <$ty as TestRand>::test_rand(&mut rng);
                        let b = <$ty as TestRand>::test_rand(&mut rng);
                        let c = <$ty as TestRand>::test_rand(&mut rng);
                        assert_eq!(a * (b + c), a * b + a * c);
                    }
                }

                #[test]
                fn additive_and_multiplicative_identities() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = <$ty as TestRand>::test_rand(&mut rng);
                        assert_eq!(a + <$ty>::zero(), a);
                        assert_eq!(a * <$ty>::zero(), <$ty>::zero());
                        assert_eq!(a * <$ty>::one(), a);
                    }
                }

                #[test]
                fn squaring_matches_self_multiplication() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = <$ty as TestRand>::test_rand(&mut rng);
                        assert_eq!(a.square(), a * a);
                    }
                }

                #[test]
                fn inverse_is_a_two_sided_inverse() {
                    let mut rng = rng();
                    for _ in 0..32 {
                        let a = nonzero(&mut rng);
                        assert_eq!(a * a.inverse(), <$ty>::one());
                        assert_eq!(a.inverse() * a, <$ty>::one());
                    }
                    assert_eq!(<$ty>::one().inverse(), <$ty>::one());
                }

                #[test]
                fn fixed_value_squaring_smoke_tests() {
                    let one = <$ty>::one();
                    let two = one + one;
                    let three = two + one;
                    assert_eq!(one.square(), one);
                    assert_eq!(two.square(), two + two);
                    assert_eq!(three.square(), three + three + three);
                    assert_eq!((-three).square(), three.square());
                }
            }
        }
    };
}

pub(crate) use field_axiom_tests;
