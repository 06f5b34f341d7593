//! `Fq6 = Fq2[v]/(v^3 - (9 + i))`.
//!
//! `1 + i` is a cube in `BN462`'s `Fq2`; `9 + i` is the standard alternative
//! for this curve family.

use super::fq::Fq;
use super::fq2::{Fq2, Fq2Parameters};
use crate::biginteger::BigInteger512;
use crate::fields::Fp6Parameters;

pub type Fq6 = crate::fields::Fp6<Fq6Parameters>;

pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    const NONRESIDUE: Fq2 = Fq2::new(NINE, ONE);
}

/// `9`, Montgomery-encoded.
const NINE: Fq = Fq::new(BigInteger512::new([
    0xde86b0a11b6460d4,
    0xfb2790f39e42b54f,
    0x701c50c6c7396db9,
    0xaa0495dd5d74ef0b,
    0xd951629450de6238,
    0xd0ed2c8323c47ea5,
    0x74e16f583839bcd1,
    0x00000000000003ba,
]));

/// `1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const ONE: Fq = Fq::new(BigInteger512::new([
    0xdc17d26770199a7f,
    0x0589204b7366a4eb,
    0xba6f2a61c3208dc8,
    0x9994481cee3640bf,
    0xf6055a3771a7c808,
    0xb708e98da5f3fff0,
    0xfe8e78666a08867f,
    0x0000000000000c3e,
]));
