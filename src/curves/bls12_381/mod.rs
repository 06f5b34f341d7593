//! BLS12-381's `G1` (over `Fq`) and `G2` (over `Fq2`, an `M`-twist) point
//! groups, instantiating the short-Weierstrass engine in `curves::models`
//! against this curve's `y^2 = x^3 + 4` and its tower (`fields::bls12_381`).

use crate::biginteger::BigInteger384 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bls12_381::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 4`, Montgomery-encoded.
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0xaa270000000cfff3,
    0x53cc0032fc34000a,
    0x69c939df20dc34c5,
    0xb1d37ebee6ba24d8,
    0x8ec9733bbf78ab2f,
    0x09d645513d83de7e,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_381G1Parameters;

impl ModelParameters for Bls12_381G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bls12_381G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_381G2Parameters;

impl ModelParameters for Bls12_381G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bls12_381G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::M;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bls12_381G1Parameters>;
pub type G1Projective = GroupProjective<Bls12_381G1Parameters>;
pub type G2Affine = GroupAffine<Bls12_381G2Parameters>;
pub type G2Projective = GroupProjective<Bls12_381G2Parameters>;

#[cfg(test)]
mod tests;
