//! The BN462 base field, a 462-bit prime field with 2-adicity 5.
//!
//! `BN462` is not a published standard curve; its seed (`u =
//! 20696027876128391046090754943131728`) was searched to land `p` exactly
//! on a 462-bit prime satisfying the BN polynomial `p(u) = 36u^4 + 36u^3 +
//! 24u^2 + 6u + 1`, with `r(u) = 36u^4 + 36u^3 + 18u^2 + 6u + 1` also prime.

use crate::{
    biginteger::BigInteger512 as BigInteger,
    fields::{Fp512, Fp512Parameters},
};

pub type Fq = Fp512<FqParameters>;

pub struct FqParameters;

impl Fp512Parameters for FqParameters {
    const MODULUS: BigInteger = BigInteger([
        0x4a1a91ab472b59e1,
        0xbce385e67ac85cfe,
        0xb49964385c4e84c4,
        0x9410a66256267290,
        0xeef4edca3a028cb1,
        0xdf76587d3b452af0,
        0xd4b5996b2b5ba9e3,
        0x000000000000237e,
    ]);

    const MODULUS_BITS: u32 = 462;

    const REPR_SHAVE_BITS: u32 = 50;

    const R: BigInteger = BigInteger([
        0xdc17d26770199a7f,
        0x0589204b7366a4eb,
        0xba6f2a61c3208dc8,
        0x9994481cee3640bf,
        0xf6055a3771a7c808,
        0xb708e98da5f3fff0,
        0xfe8e78666a08867f,
        0x0000000000000c3e,
    ]);

    const R2: BigInteger = BigInteger([
        0xe7d54721d3e79491,
        0xe26301609521e6ab,
        0xe549bb8b030b7edf,
        0xda0262ff36248c8f,
        0x3da4290ee51a370e,
        0x3945d8d31398f380,
        0x09d15987f46b0b5d,
        0x0000000000001efa,
    ]);

    const INV: u64 = 0x20a6e71c3b0555df;

    /// GENERATOR = 5.
    const GENERATOR: BigInteger =
        BigInteger([5, 0, 0, 0, 0, 0, 0, 0]);

    const TWO_ADICITY: u32 = 5;

    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x47764b7801745dba,
        0x41fd6b338af8b0ee,
        0x1f9ac7e384e13b70,
        0x34b52ef626f633b8,
        0x18f3e98fe343ccd3,
        0x1a663aa99185c92a,
        0x7c3a9df0dda536dc,
        0x0000000000000710,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x250d48d5a395acf0,
        0x5e71c2f33d642e7f,
        0x5a4cb21c2e274262,
        0xca0853312b133948,
        0x777a76e51d014658,
        0xefbb2c3e9da29578,
        0x6a5accb595add4f1,
        0x00000000000011bf,
    ]);

    const T: BigInteger = BigInteger([
        0xf250d48d5a395acf,
        0x25e71c2f33d642e7,
        0x85a4cb21c2e27426,
        0x8ca0853312b13394,
        0x8777a76e51d01465,
        0x1efbb2c3e9da2957,
        0xf6a5accb595add4f,
        0x000000000000011b,
    ]);

    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0xf9286a46ad1cad67,
        0x12f38e1799eb2173,
        0x42d26590e1713a13,
        0xc6504299895899ca,
        0xc3bbd3b728e80a32,
        0x8f7dd961f4ed14ab,
        0xfb52d665acad6ea7,
        0x000000000000008d,
    ]);
}
