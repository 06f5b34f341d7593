//! The BN446 base field, a 446-bit prime field with 2-adicity 1.
//!
//! `BN446` is not a published standard curve; its seed (`u =
//! 1285999623901309723460934451024661`) was searched to land `p` exactly on
//! a 446-bit prime satisfying the BN polynomial `p(u) = 36u^4 + 36u^3 +
//! 24u^2 + 6u + 1`, with `r(u) = 36u^4 + 36u^3 + 18u^2 + 6u + 1` also prime.

use crate::{
    biginteger::BigInteger448 as BigInteger,
    fields::{Fp448, Fp448Parameters},
};

pub type Fq = Fp448<FqParameters>;

pub struct FqParameters;

impl Fp448Parameters for FqParameters {
    const MODULUS: BigInteger = BigInteger([
        0x03f91450ad69ab0f,
        0x4e3711832a9135a0,
        0x0da38b1b5ebd77bf,
        0xb8c9e0d02e614e11,
        0xfbb0e56f83d39c71,
        0xbdd3a54af3ddd17a,
        0x22add9459e42ff4d,
    ]);

    const MODULUS_BITS: u32 = 446;

    const REPR_SHAVE_BITS: u32 = 2;

    const R: BigInteger = BigInteger([
        0xe43071cb421c5297,
        0xdc7e8569d607889f,
        0xa087324068d1b9c4,
        0xf27ada4ebb56dd88,
        0x1e29b9f36536b8e3,
        0xcf367af354ef45a3,
        0x0d3f0f18ac2b04df,
    ]);

    const R2: BigInteger = BigInteger([
        0x276821f55414d7f0,
        0xe80c7a41114097ac,
        0xcb4fe1661669f37f,
        0x91c46bf27724b9ef,
        0xa9417393d9948800,
        0x96d5848a14d8bac9,
        0x043be91bf0130d6f,
    ]);

    const INV: u64 = 0x824498f4965a1c11;

    /// GENERATOR = -1 mod MODULUS.
    const GENERATOR: BigInteger = BigInteger([
        0x03f91450ad69ab0e,
        0x4e3711832a9135a0,
        0x0da38b1b5ebd77bf,
        0xb8c9e0d02e614e11,
        0xfbb0e56f83d39c71,
        0xbdd3a54af3ddd17a,
        0x22add9459e42ff4d,
    ]);

    const TWO_ADICITY: u32 = 1;

    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x03f91450ad69ab0e,
        0x4e3711832a9135a0,
        0x0da38b1b5ebd77bf,
        0xb8c9e0d02e614e11,
        0xfbb0e56f83d39c71,
        0xbdd3a54af3ddd17a,
        0x22add9459e42ff4d,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x01fc8a2856b4d587,
        0xa71b88c195489ad0,
        0x86d1c58daf5ebbdf,
        0xdc64f0681730a708,
        0x7dd872b7c1e9ce38,
        0xdee9d2a579eee8bd,
        0x1156eca2cf217fa6,
    ]);

    const T: BigInteger = BigInteger([
        0x01fc8a2856b4d587,
        0xa71b88c195489ad0,
        0x86d1c58daf5ebbdf,
        0xdc64f0681730a708,
        0x7dd872b7c1e9ce38,
        0xdee9d2a579eee8bd,
        0x1156eca2cf217fa6,
    ]);

    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x00fe45142b5a6ac3,
        0xd38dc460caa44d68,
        0x4368e2c6d7af5def,
        0x6e3278340b985384,
        0xbeec395be0f4e71c,
        0x6f74e952bcf7745e,
        0x08ab76516790bfd3,
    ]);
}
