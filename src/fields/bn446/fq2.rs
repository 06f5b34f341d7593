//! `Fq2 = Fq[i]/(i^2 - (-1))`.

use super::fq::Fq;
use crate::biginteger::BigInteger448 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -1, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x1fc8a2856b4d5878,
        0x71b88c195489ad00,
        0x6d1c58daf5ebbdfa,
        0xc64f0681730a7088,
        0xdd872b7c1e9ce38d,
        0xee9d2a579eee8bd7,
        0x156eca2cf217fa6d,
    ]));
}
