//! BLS12-461's `G1` (over `Fq`) and `G2` (over `Fq2`, an `M`-twist) point
//! groups, instantiating the short-Weierstrass engine in `curves::models`
//! against this curve's `y^2 = x^3 + 4` and its tower (`fields::bls12_461`).

use crate::biginteger::BigInteger512 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bls12_461::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 4`, Montgomery-encoded.
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0xb6f4699b1d9f0682,
    0xe5f59efde1b0dc60,
    0xaf9b6275102f0768,
    0xc65845e0dc148870,
    0x568133706953027b,
    0x229e2400157371d5,
    0xdacd52927bc526b4,
    0x0000000000000a9c,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_461G1Parameters;

impl ModelParameters for Bls12_461G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bls12_461G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_461G2Parameters;

impl ModelParameters for Bls12_461G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bls12_461G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::M;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bls12_461G1Parameters>;
pub type G1Projective = GroupProjective<Bls12_461G1Parameters>;
pub type G2Affine = GroupAffine<Bls12_461G2Parameters>;
pub type G2Projective = GroupProjective<Bls12_461G2Parameters>;

#[cfg(test)]
mod tests;
