//! FKM12-447's `G1` (over `Fq`) and `G2` (over `Fq2`, an `M`-twist) point
//! groups, instantiating the short-Weierstrass engine in `curves::models`
//! against this curve's `y^2 = x^3 + 1` and its tower (`fields::fkm12_447`).

use crate::biginteger::BigInteger448 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::fkm12_447::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0x690ef0784758a0dd,
    0x3589bbf9555b0f1d,
    0x241f47bfab84f8e1,
    0xee435fa4ba451f5b,
    0x04efb371814d04c7,
    0x5831899f7f320448,
    0x1d8118cc30427bf2,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Fkm12_447G1Parameters;

impl ModelParameters for Fkm12_447G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Fkm12_447G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Fkm12_447G2Parameters;

impl ModelParameters for Fkm12_447G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Fkm12_447G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::M;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Fkm12_447G1Parameters>;
pub type G1Projective = GroupProjective<Fkm12_447G1Parameters>;
pub type G2Affine = GroupAffine<Fkm12_447G2Parameters>;
pub type G2Projective = GroupProjective<Fkm12_447G2Parameters>;

#[cfg(test)]
mod tests;
