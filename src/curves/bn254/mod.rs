//! BN254's `G1` (over `Fq`) and `G2` (over `Fq2`, a `D`-twist) point groups,
//! instantiating the short-Weierstrass engine in `curves::models` against
//! this curve's `y^2 = x^3 + 3` and its tower (`fields::bn254`).

use crate::biginteger::BigInteger256 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bn254::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 3`, Montgomery-encoded.
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0x7a17caa950ad28d7,
    0x1f6ac17ae15521b9,
    0x334bea4e696bd284,
    0x2a1f6744ce179d8e,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn254G1Parameters;

impl ModelParameters for Bn254G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bn254G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn254G2Parameters;

impl ModelParameters for Bn254G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bn254G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::D;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bn254G1Parameters>;
pub type G1Projective = GroupProjective<Bn254G1Parameters>;
pub type G2Affine = GroupAffine<Bn254G2Parameters>;
pub type G2Projective = GroupProjective<Bn254G2Parameters>;

#[cfg(test)]
mod tests;
