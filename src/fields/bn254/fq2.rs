//! `Fq2 = Fq[i]/(i^2 - (-1))`.

use super::fq::Fq;
use crate::biginteger::BigInteger256 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -1, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x68c3488912edefaa,
        0x8d087f6872aabf4f,
        0x51e1a24709081231,
        0x2259d6b14729c0fa,
    ]));
}
