//! `Fq2 = Fq[i]/(i^2 - 5)`.

use super::fq::Fq;
use crate::biginteger::BigInteger448 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = 5, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x85a502817c8359f0,
        0x72de9531c73afb47,
        0xc0a6d3fe3d6fda06,
        0x4c11fe1936c5fc90,
        0x4fe67b2b19ac427a,
        0xd65d88a7fbb56c2c,
        0x4805d99656b7ea61,
    ]));
}
