use super::{Fq, Fq2, Fq6};
use crate::fields::models::field_axiom_tests::field_axiom_tests;

field_axiom_tests!(fq, Fq);
field_axiom_tests!(fq2, Fq2);
field_axiom_tests!(fq6, Fq6);
