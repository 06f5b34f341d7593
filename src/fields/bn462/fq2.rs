//! `Fq2 = Fq[i]/(i^2 - 5)`.

use super::fq::Fq;
use crate::biginteger::BigInteger512 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = 5, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x025c8a59e954aa9a,
        0x5eca1b92c638db9d,
        0xef926fb073544023,
        0x6bd4c22e50e8d12d,
        0xdf25d54afe445b79,
        0xb3b63747027ed4c3,
        0x2412c094e6cef69a,
        0x00000000000019bc,
    ]));
}
