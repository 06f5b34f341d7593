//! `Fq6 = Fq2[v]/(v^3 - (1 + i))`.

use super::fq::Fq;
use super::fq2::{Fq2, Fq2Parameters};
use crate::biginteger::BigInteger448;
use crate::fields::Fp6Parameters;

pub type Fq6 = crate::fields::Fp6<Fq6Parameters>;

pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    const NONRESIDUE: Fq2 = Fq2::new(ONE, ONE);
}

/// `1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const ONE: Fq = Fq::new(BigInteger448::new([
    0x690ef0784758a0dd,
    0x3589bbf9555b0f1d,
    0x241f47bfab84f8e1,
    0xee435fa4ba451f5b,
    0x4efb371814d04c76,
    0x5831899f7f320448,
    0x1d8118cc30427bf2,
]));
