//! `Fq6 = Fq2[v]/(v^3 - (9 + i))`.
//!
//! `1 + i` is a cube in `BLS12-461`'s `Fq2`; `9 + i` is a verified
//! alternative.

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
    0xff66c04e15b145fa,
    0x5f93823beb58ef90,
    0xf0e5dea538d34323,
    0xbb6a453bd3b74dd0,
    0xbab97966f4682758,
    0x3dd211efbd0ec8ec,
    0x6fe1cd85951d1103,
    0x0000000000000b56,
]));

/// `1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const ONE: Fq = Fq::new(BigInteger512::new([
    0xc9fc47b5b45c4a4b,
    0xdf528b3ec8e13760,
    0xc61e977f6fa24f62,
    0xb4726976527c0748,
    0x9d89873212e75edc,
    0x1b9d757c1f7451b6,
    0xb85f475f8fb17d6d,
    0x0000000000000f30,
]));
