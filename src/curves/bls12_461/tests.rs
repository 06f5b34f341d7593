use super::{Bls12_461G1Parameters, Bls12_461G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Bls12_461G1Parameters);
point_axiom_tests!(g2, Bls12_461G2Parameters);
