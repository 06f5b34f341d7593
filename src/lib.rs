//! Constant-time tower-field arithmetic (`Fp -> Fp2 -> Fp6`) and complete,
//! exception-free short-Weierstrass point arithmetic for the BN and BLS12
//! families of pairing-friendly curves.
//!
//! `biginteger` carries the fixed-width unsigned integers the prime-field
//! layer is built on; `fields` is the tower itself; `curves` is the point
//! arithmetic and the per-curve parameter registry that instantiates it.
//! There is no pairing, no scalar multiplication and no serialisation layer
//! here - see `DESIGN.md` for what is and is not in scope.

#![deny(unused_must_use)]

pub mod biginteger;
pub mod curves;
pub mod fields;
