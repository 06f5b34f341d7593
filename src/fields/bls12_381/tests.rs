use super::{Fq, Fq2, Fq6};
use crate::fields::models::field_axiom_tests::field_axiom_tests;

field_axiom_tests!(fq, Fq);
field_axiom_tests!(fq2, Fq2);
field_axiom_tests!(fq6, Fq6);

#[test]
fn fq6_random_inverse_round_trip() {
    use crate::fields::models::test_rand::TestRand;
    use crate::fields::Field;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    let mut rng = XorShiftRng::from_seed([9u8; 16]);
    for _ in 0..16 {
        let x = loop {
            let candidate = Fq6::test_rand(&mut rng);
            if !candidate.is_zero().declassify() {
                break candidate;
            }
        };
        assert_eq!(x * x.inverse(), Fq6::one());
    }
}
