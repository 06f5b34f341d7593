//! Montgomery arithmetic for large integers and models of extension fields.
//!
//! - `Fp256`, `Fp384`, `Fp448` and `Fp512` capture the base-field moduli of
//!   length 4, 6, 7 and 8 words of 64 bits respectively - enough to host
//!   every curve in the registry (`BN254` needs 4 words; `BLS12-377` and
//!   `BLS12-381` need 6; `BN446`/`FKM12-447` need 7; `BLS12-461`/`BN462`
//!   need 8).
//! - Quadratic (`Fp2`) and sextic (`Fp6`) towering extensions on top of
//!   whichever base field a curve chooses.

#[macro_use]
mod fp_macro;

pub mod fp_256;
pub use self::fp_256::*;

pub mod fp_384;
pub use self::fp_384::*;

pub mod fp_448;
pub use self::fp_448::*;

pub mod fp_512;
pub use self::fp_512::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp6_3over2;
pub use self::fp6_3over2::*;

#[cfg(test)]
pub(crate) mod test_rand;
#[cfg(test)]
pub(crate) mod field_axiom_tests;
