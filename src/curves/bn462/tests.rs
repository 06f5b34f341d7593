use super::{Bn462G1Parameters, Bn462G2Parameters};
use crate::curves::models::point_axiom_tests::point_axiom_tests;

point_axiom_tests!(g1, Bn462G1Parameters);
point_axiom_tests!(g2, Bn462G2Parameters);
