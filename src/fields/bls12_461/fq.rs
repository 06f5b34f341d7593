//! The BLS12-461 base field, a 461-bit prime field with 2-adicity 2.
//!
//! `BLS12-461` is not a published standard curve; its seed (`u =
//! 155241133185323183109925`) was searched to land `p` exactly on a 461-bit
//! prime satisfying the BLS12 polynomial `p(u) = (u-1)^2 (u^4-u^2+1)/3 + u`,
//! with `r(u) = u^4 - u^2 + 1` also prime.

use crate::{
    biginteger::BigInteger512 as BigInteger,
    fields::{Fp512, Fp512Parameters},
};

pub type Fq = Fp512<FqParameters>;

pub struct FqParameters;

impl Fp512Parameters for FqParameters {
    const MODULUS: BigInteger = BigInteger([
        0x387e5a9dd9e91155,
        0x4baa46fea0ea0091,
        0x346f7dc4572d1b11,
        0x85b8affc36edca59,
        0x8fd274abf1253c7b,
        0xf2249caf7934d14c,
        0x357e575e180677f6,
        0x0000000000001913,
    ]);

    const MODULUS_BITS: u32 = 461;

    const REPR_SHAVE_BITS: u32 = 51;

    const R: BigInteger = BigInteger([
        0xc9fc47b5b45c4a4b,
        0xdf528b3ec8e13760,
        0xc61e977f6fa24f62,
        0xb4726976527c0748,
        0x9d89873212e75edc,
        0x1b9d757c1f7451b6,
        0xb85f475f8fb17d6d,
        0x0000000000000f30,
    ]);

    const R2: BigInteger = BigInteger([
        0x71760b083ca0e742,
        0x4a1ba84f6c1b40f8,
        0x34fc2931897f6620,
        0xe906158885cc184a,
        0xd31059fc106f4d01,
        0xedef5d7f22b3a97f,
        0x20bf168251541aa6,
        0x0000000000001155,
    ]);

    const INV: u64 = 0x1314963370e19c03;

    /// GENERATOR = 2.
    const GENERATOR: BigInteger =
        BigInteger([2, 0, 0, 0, 0, 0, 0, 0]);

    const TWO_ADICITY: u32 = 2;

    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x27344f42cb85a8af,
        0x08cdc86688af6c18,
        0x80b8c079e3a68767,
        0xb715590d3f3259ac,
        0x01d4ee788aca64c8,
        0xb1079e6b254eb1e7,
        0xd8a5eaadb8b9678c,
        0x0000000000000bd6,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x9c3f2d4eecf488aa,
        0xa5d5237f50750048,
        0x9a37bee22b968d88,
        0xc2dc57fe1b76e52c,
        0x47e93a55f8929e3d,
        0x79124e57bc9a68a6,
        0x9abf2baf0c033bfb,
        0x0000000000000c89,
    ]);

    const T: BigInteger = BigInteger([
        0x4e1f96a7767a4455,
        0x52ea91bfa83a8024,
        0x4d1bdf7115cb46c4,
        0xe16e2bff0dbb7296,
        0x23f49d2afc494f1e,
        0xbc89272bde4d3453,
        0xcd5f95d786019dfd,
        0x0000000000000644,
    ]);

    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x270fcb53bb3d222a,
        0x297548dfd41d4012,
        0x268defb88ae5a362,
        0x70b715ff86ddb94b,
        0x91fa4e957e24a78f,
        0xde449395ef269a29,
        0x66afcaebc300cefe,
        0x0000000000000322,
    ]);
}
