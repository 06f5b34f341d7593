use super::{Fq, Fq2, Fq6};
use crate::fields::models::field_axiom_tests::field_axiom_tests;

field_axiom_tests!(fq, Fq);
field_axiom_tests!(fq2, Fq2);
field_axiom_tests!(fq6, Fq6);

#[test]
fn fq6_fixed_value_squaring() {
    use crate::fields::Field;
    let one = Fq6::one();
    let two = one + one;
    let three = two + one;
    assert_eq!(one.square(), one);
    assert_eq!(two.square(), two + two);
    assert_eq!((-three).square(), three + three + three);
}
