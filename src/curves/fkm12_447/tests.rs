use super::{Fkm12_447G1Parameters, Fkm12_447G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Fkm12_447G1Parameters);
point_axiom_tests!(g2, Fkm12_447G2Parameters);
