//! Group-axiom, completeness, and batch-affine-conversion properties,
//! written once and instantiated per curve x subgroup via
//! [`point_axiom_tests`].

macro_rules! point_axiom_tests {
    ($modname:ident, $Params:ty) => {
        paste::paste! {
            mod [<$modname _group_axioms>] {
                use crate::curves::{GroupProjective, ModelParameters};
                use crate::fields::models::test_rand::TestRand;
                use crate::fields::Field;
                use rand::SeedableRng;
                use rand_xorshift::XorShiftRng;

                type P = $Params;
                type Point = GroupProjective<P>;

                fn rng() -> XorShiftRng {
                    XorShiftRng::from_seed([
                        0x13, 0x9d, 0xda, 0x5f, 0x54, 0x04, 0x29, 0x9b, 0x34, 0x2e, 0xfc, 0xac,
                        0x7e, 0xcc, 0x02, 0x91,
                    ])
                }

                fn rand_point(rng: &mut XorShiftRng) -> Point {
                    loop {
                        let x = <P as ModelParameters>::BaseField::test_rand(rng);
                        let mut p = Point::infinity();
                        if p.try_set_from_x(x).declassify() {
                            return p;
                        }
                    }
                }

                #[test]
                fn identity_and_negation() {
                    let mut rng = rng();
                    for _ in 0..16 {
                        let p = rand_point(&mut rng);
                        assert!(p.sum(&Point::infinity()).equals(&p).declassify());
                        assert!(p.sum(&p.neg()).equals(&Point::infinity()).declassify());
                    }
                }

                #[test]
                fn addition_is_commutative_and_associative() {
                    let mut rng = rng();
                    for _ in 0..16 {
                        let p = rand_point(&mut rng);
                        let q = rand_point(&mut rng);
                        let r = rand_point(&mut rng);
                        assert!(p.sum(&q).equals(&q.sum(&p)).declassify());
                        assert!(p.sum(&q).sum(&r).equals(&p.sum(&q.sum(&r))).declassify());
                    }
                }

                #[test]
                fn doubling_equals_self_addition() {
                    let mut rng = rng();
                    for _ in 0..16 {
                        let p = rand_point(&mut rng);
                        assert!(p.double().equals(&p.sum(&p)).declassify());
                    }
                }

                #[test]
                fn completeness_on_edge_case_inputs() {
                    let mut rng = rng();
                    let p = rand_point(&mut rng);
                    let inf = Point::infinity();
                    assert!(p.sum(&p).equals(&p.double()).declassify());
                    assert!(p.sum(&p.neg()).equals(&inf).declassify());
                    assert!(inf.sum(&p).equals(&p).declassify());
                    assert!(p.sum(&inf).equals(&p).declassify());
                    assert!(inf.sum(&inf).equals(&inf).declassify());
                }

                #[test]
                fn mixed_addition_matches_full_addition() {
                    let mut rng = rng();
                    for _ in 0..16 {
                        let p = rand_point(&mut rng);
                        let q = rand_point(&mut rng);
                        let q_affine = q.to_affine();
                        assert!(p.madd(&q_affine).equals(&p.sum(&q)).declassify());
                    }
                }

                #[test]
                fn affine_round_trip() {
                    let mut rng = rng();
                    for _ in 0..16 {
                        let p = rand_point(&mut rng);
                        let affine = p.to_affine();
                        let back = Point::from_affine(&affine);
                        assert!(back.equals(&p).declassify());
                        assert_eq!(back.to_affine(), affine);
                    }
                }

                #[test]
                fn batch_affine_matches_pointwise_and_handles_infinity() {
                    let mut rng = rng();
                    let g = rand_point(&mut rng);
                    let two_g = g.double();
                    let three_g = g.sum(&two_g);
                    let points = [g, Point::infinity(), two_g, Point::infinity(), three_g];

                    let batch = Point::batch_to_affine(&points);
                    assert_eq!(batch[0], g.to_affine());
                    assert_eq!(batch[2], two_g.to_affine());
                    assert_eq!(batch[4], three_g.to_affine());

                    let sentinel = crate::curves::GroupAffine::<P>::new(
                        <P as ModelParameters>::BaseField::zero(),
                        <P as ModelParameters>::BaseField::zero(),
                    );
                    assert_eq!(batch[1], sentinel);
                    assert_eq!(batch[3], sentinel);
                }
            }
        }
    };
}

pub(crate) use point_axiom_tests;
