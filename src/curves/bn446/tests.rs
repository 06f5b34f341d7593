use super::{Bn446G1Parameters, Bn446G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Bn446G1Parameters);
point_axiom_tests!(g2, Bn446G2Parameters);
