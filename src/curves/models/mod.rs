//! Models of curve equations. This core supports exactly one: the
//! short-Weierstrass form `y^2 = x^3 + b` (`a` is fixed at zero).

pub mod short_weierstrass_projective;
pub use self::short_weierstrass_projective::*;

#[cfg(test)]
pub(crate) mod point_axiom_tests;
