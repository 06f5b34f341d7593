//! `Fq6 = Fq2[v]/(v^3 - (1 + i))`.
//!
//! BLS12-377's base prime validly admits the textbook cubic non-residue
//! `1 + i`; unlike the BN-family curves in the registry, no substitute is
//! needed here.

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
    202099033278250856u64,
    5854854902718660529u64,
    11492539364873682930u64,
    8885205928937022213u64,
    5545221690922665192u64,
    39800542322357402u64,
]));
