//! The FKM12-447 base field, a 447-bit prime field with 2-adicity 5.
//!
//! `FKM12-447` is not a published standard curve; its seed (`u =
//! 29379406200457505774482`) was searched to land `p` exactly on a 447-bit
//! prime satisfying the BLS12 polynomial `p(u) = (u-1)^2 (u^4-u^2+1)/3 + u`,
//! with `r(u) = u^4 - u^2 + 1` also prime.

use crate::{
    biginteger::BigInteger448 as BigInteger,
    fields::{Fp448, Fp448Parameters},
};

pub type Fq = Fp448<FqParameters>;

pub struct FqParameters;

impl Fp448Parameters for FqParameters {
    const MODULUS: BigInteger = BigInteger([
        0x87a5afd7e837ca61,
        0x98d216ace38c504b,
        0xf3f592c01c29025f,
        0x5b3ee01e6c93a036,
        0x3b01984d4e653bd8,
        0xe29a27758044a93d,
        0x4b7fa2669a948159,
    ]);

    const MODULUS_BITS: u32 = 447;

    const REPR_SHAVE_BITS: u32 = 1;

    const R: BigInteger = BigInteger([
        0x690ef0784758a0dd,
        0x3589bbf9555b0f1d,
        0x241f47bfab84f8e1,
        0xee435fa4ba451f5b,
        0x4efb371814d04c76,
        0x5831899f7f320448,
        0x1d8118cc30427bf2,
    ]);

    const R2: BigInteger = BigInteger([
        0x29ebb252ae019283,
        0x74c3cc0b066816c2,
        0x426fe641d42bde60,
        0x399b2cbfb9049ed9,
        0xa242b1edc7a70b82,
        0x1b0cb01065f7c97a,
        0x1eaa4bc8d0fdfb34,
    ]);

    const INV: u64 = 0x4f37f31e59b1a65f;

    /// GENERATOR = 5.
    const GENERATOR: BigInteger = BigInteger([5, 0, 0, 0, 0, 0, 0]);

    const TWO_ADICITY: u32 = 5;

    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x41924d590ed1ef97,
        0x770231593faf7491,
        0x3a843bba07e9ad26,
        0xcfc2d2bed69e5e30,
        0x74bc72056963cb3f,
        0xb38db259ecf5c94c,
        0x2506fd4f682c07ee,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0xc3d2d7ebf41be530,
        0xcc690b5671c62825,
        0x79fac9600e14812f,
        0x2d9f700f3649d01b,
        0x9d80cc26a7329dec,
        0xf14d13bac022549e,
        0x25bfd1334d4a40ac,
    ]);

    const T: BigInteger = BigInteger([
        0x5c3d2d7ebf41be53,
        0xfcc690b5671c6282,
        0xb79fac9600e14812,
        0xc2d9f700f3649d01,
        0xe9d80cc26a7329de,
        0xcf14d13bac022549,
        0x025bfd1334d4a40a,
    ]);

    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x2e1e96bf5fa0df29,
        0x7e63485ab38e3141,
        0xdbcfd64b0070a409,
        0x616cfb8079b24e80,
        0xf4ec0661353994ef,
        0x678a689dd60112a4,
        0x012dfe899a6a5205,
    ]);
}
