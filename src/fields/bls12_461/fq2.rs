//! `Fq2 = Fq[i]/(i^2 - 2)`.

use super::fq::Fq;
use crate::biginteger::BigInteger512 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = 2, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x5b7a34cd8ecf8341,
        0x72facf7ef0d86e30,
        0x57cdb13a881783b4,
        0xe32c22f06e0a4438,
        0xab4099b834a9813d,
        0x45164e48c5b3d220,
        0x3b403761075c82e3,
        0x000000000000054e,
    ]));
}
