use super::{Bn254G1Parameters, Bn254G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Bn254G1Parameters);
point_axiom_tests!(g2, Bn254G2Parameters);
