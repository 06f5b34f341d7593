use super::{Bls12_381G1Parameters, Bls12_381G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters};
use crate::fields::models::test_rand::TestRand;
use crate::fields::Field;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

point_axiom_tests!(g1, Bls12_381G1Parameters);
point_axiom_tests!(g2, Bls12_381G2Parameters);

/// A fixed, deterministically-derived G1 point standing in for "the
/// generator" (this curve's parameters are test constants, not the
/// literature's standard BLS12-381 generator, so there is no canonical
/// `G` to hard-code).
fn fixed_test_point() -> GroupProjective<Bls12_381G1Parameters> {
    let mut rng = XorShiftRng::from_seed([7u8; 16]);
    loop {
        let x = <Bls12_381G1Parameters as ModelParameters>::BaseField::test_rand(&mut rng);
        let mut p = GroupProjective::<Bls12_381G1Parameters>::infinity();
        if p.try_set_from_x(x).declassify() {
            return p;
        }
    }
}

#[test]
fn generator_seed_scenario() {
    let g = fixed_test_point();
    assert!(g.double().equals(&g.sum(&g)).declassify());
    assert!(g
        .sum(&g.neg())
        .equals(&GroupProjective::<Bls12_381G1Parameters>::infinity())
        .declassify());
    assert!(GroupProjective::<Bls12_381G1Parameters>::infinity()
        .sum(&g)
        .equals(&g)
        .declassify());
}

#[test]
fn batch_to_affine_on_generator_multiples_and_infinities() {
    let g = fixed_test_point();
    let two_g = g.double();
    let three_g = g.sum(&two_g);
    let points = [g, GroupProjective::infinity(), two_g, GroupProjective::infinity(), three_g];

    let batch = GroupProjective::batch_to_affine(&points);
    let sentinel = GroupAffine::<Bls12_381G1Parameters>::new(
        <Bls12_381G1Parameters as ModelParameters>::BaseField::zero(),
        <Bls12_381G1Parameters as ModelParameters>::BaseField::zero(),
    );
    assert_eq!(batch, [g.to_affine(), sentinel, two_g.to_affine(), sentinel, three_g.to_affine()]);
}
