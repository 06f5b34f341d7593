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
    0xe43071cb421c5297,
    0xdc7e8569d607889f,
    0xa087324068d1b9c4,
    0xf27ada4ebb56dd88,
    0x1e29b9f36536b8e3,
    0xcf367af354ef45a3,
    0x0d3f0f18ac2b04df,
]));
