use super::{Bls12_377G1Parameters, Bls12_377G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Bls12_377G1Parameters);
point_axiom_tests!(g2, Bls12_377G2Parameters);
