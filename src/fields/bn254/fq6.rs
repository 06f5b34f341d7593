//! `Fq6 = Fq2[v]/(v^3 - (9 + i))`.
//!
//! `1 + i` is a cube in BN254's `Fq2` (so `v^3 = 1+i` would not define a
//! field); `9 + i` is the standard alternative for this curve family.

use super::fq2::{Fq2, Fq2Parameters};
use crate::biginteger::BigInteger256;
use crate::fields::Fp6Parameters;

pub type Fq6 = crate::fields::Fp6<Fq6Parameters>;

pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    const NONRESIDUE: Fq2 = Fq2::new(NINE, ONE);
}

use super::fq::Fq;

/// `9`, Montgomery-encoded.
const NINE: Fq = Fq::new(BigInteger256::new([
    0xf60647ce410d7ff7,
    0x2f3d6f4dd31bd011,
    0x2943337e3940c6d1,
    0x1d9598e8a7e39857,
]));

/// `1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const ONE: Fq = Fq::new(BigInteger256::new([
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
]));
