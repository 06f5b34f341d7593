//! BLS12-377's `G1` (over `Fq`) and `G2` (over `Fq2`, a `D`-twist) point
//! groups, instantiating the short-Weierstrass engine in `curves::models`
//! against this curve's `y^2 = x^3 + 1` and its tower (`fields::bls12_377`).

use crate::biginteger::BigInteger384 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bls12_377::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0x0047ccccccccccbd,
    0x51409f837fffffb1,
    0x9f7db3a98a7d3ff2,
    0x7b4e97b76e7c6305,
    0x4cf495bf803c84e8,
    0x008d6661e2fdf49a,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_377G1Parameters;

impl ModelParameters for Bls12_377G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bls12_377G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bls12_377G2Parameters;

impl ModelParameters for Bls12_377G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bls12_377G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::D;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bls12_377G1Parameters>;
pub type G1Projective = GroupProjective<Bls12_377G1Parameters>;
pub type G2Affine = GroupAffine<Bls12_377G2Parameters>;
pub type G2Projective = GroupProjective<Bls12_377G2Parameters>;

#[cfg(test)]
mod tests;
