//! BN446's `G1` (over `Fq`) and `G2` (over `Fq2`, a `D`-twist) point groups,
//! instantiating the short-Weierstrass engine in `curves::models` against
//! this curve's `y^2 = x^3 + 3` and its tower (`fields::bn446`).

use crate::biginteger::BigInteger448 as BigInteger;
use crate::curves::{GroupAffine, GroupProjective, ModelParameters, SWModelParameters, TwistType};
use crate::fields::bn446::{Fq, Fq2, Fq6Parameters};
use crate::fields::Fp6Parameters;

/// `b = 3`, Montgomery-encoded.
const COEFF_B: Fq = Fq::new(BigInteger::new([
    0xa898411118eb4cb6,
    0x47447eba5785643f,
    0x1075ce50b4e9db17,
    0x1ea6ae1c03a34a87,
    0x5ecc486aabd08e3a,
    0xafcfcb8f0aefff6e,
    0x050f5404663e0f51,
]));

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn446G1Parameters;

impl ModelParameters for Bn446G1Parameters {
    type BaseField = Fq;
}

impl SWModelParameters for Bn446G1Parameters {
    const COEFF_B: Fq = COEFF_B;
    const TWIST_TYPE: TwistType = TwistType::None;
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bn446G2Parameters;

impl ModelParameters for Bn446G2Parameters {
    type BaseField = Fq2;
}

impl SWModelParameters for Bn446G2Parameters {
    const COEFF_B: Fq2 = Fq2::new(COEFF_B, Fq::new(BigInteger::new([0, 0, 0, 0, 0, 0, 0])));
    const TWIST_TYPE: TwistType = TwistType::D;

    fn mul_by_sextic_nonresidue(fe: &Fq2) -> Fq2 {
        *fe * Fq6Parameters::NONRESIDUE
    }
}

pub type G1Affine = GroupAffine<Bn446G1Parameters>;
pub type G1Projective = GroupProjective<Bn446G1Parameters>;
pub type G2Affine = GroupAffine<Bn446G2Parameters>;
pub type G2Projective = GroupProjective<Bn446G2Parameters>;

#[cfg(test)]
mod tests;
