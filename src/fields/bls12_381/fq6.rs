//! `Fq6 = Fq2[v]/(v^3 - (1 + i))`.

use super::fq::Fq;
use super::fq2::{Fq2, Fq2Parameters};
use crate::biginteger::BigInteger384;
use crate::fields::Fp6Parameters;

pub type Fq6 = crate::fields::Fp6<Fq6Parameters>;

pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    const NONRESIDUE: Fq2 = Fq2::new(ONE, ONE);
}

/// `1`, Montgomery-encoded (equal to `Fq`'s `R` constant).
const ONE: Fq = Fq::new(BigInteger384::new([
    0x760900000002fffd,
    0xebf4000bc40c0002,
    0x5f48985753c758ba,
    0x77ce585370525745,
    0x5c071a97a256ec6d,
    0x15f65ec3fa80e493,
]));
