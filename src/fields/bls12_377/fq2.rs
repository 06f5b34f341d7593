//! `Fq2 = Fq[i]/(i^2 - 5)`.
//!
//! BLS12-377's modulus is `1 mod 4`, so `-1` is a square there and cannot
//! serve as the quadratic non-residue; `5` is the smallest one.

use super::fq::Fq;
use crate::biginteger::BigInteger384 as BigInteger;
use crate::fields::Fp2Parameters;

pub type Fq2 = crate::fields::Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = 5, Montgomery-encoded.
    const NONRESIDUE: Fq = Fq::new(BigInteger([
        0x88fd3ffffffffd07,
        0x7f37c04d4ffffe74,
        0xfe81201ffa68f7bb,
        0x4e661ca22778db8c,
        0xba8be6fd148d4f4f,
        0x0114c5a35730b618,
    ]));
}
