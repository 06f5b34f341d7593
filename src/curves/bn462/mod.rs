//! BN462's `G1` (over `Fq`) and `G2` (over `Fq2`, a `D`-twist) point groups,
//! instantiating the short-Weierstrass engine in `curves::models` against
//! this curve's `y^2 = x^3 + 5` and its tower (`fields::bn462`).

use crate::biginteger::BigInteger512 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bn462::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 5`, Montgomery-encoded.
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0x025c8a59e954aa9a,
    0x5eca1b92c638db9d,
    0x98e23da549dddc9b,
    0x6bd4c22e50e8d12e,
    0xdf25d54afe445b79,
    0xb3b63747027ed4c3,
    0x2412c094e6cef69a,
    0x00000000000019bc,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn462G1Parameters;

impl ModelParameters for Bn462G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bn462G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn462G2Parameters;

impl ModelParameters for Bn462G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bn462G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::D;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bn462G1Parameters>;
pub type G1Projective = GroupProjective<Bn462G1Parameters>;
pub type G2Affine = GroupAffine<Bn462G2Parameters>;
pub type G2Projective = GroupProjective<Bn462G2Parameters>;

#[cfg(test)]
mod tests;
