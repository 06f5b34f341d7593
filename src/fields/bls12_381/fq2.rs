//! `Fq2 = Fq[i]/(i^2 - (-1))`.

use super::fq::Fq;
use crate::biginteger::BigInteger384 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -1, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x43f5fffffffcaaae,
        0x32b7fff2ed47fffd,
        0x07e83a49a2e99d69,
        0xeca8f3318332bb7a,
        0xef148d1ea0f4c069,
        0x040ab3263eff0206,
    ]));
}
