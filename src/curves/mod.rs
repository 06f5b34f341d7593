//! Short-Weierstrass elliptic-curve point arithmetic and the per-curve
//! parameter registry that instantiates it.
//!
//! Every curve in the registry is a BN or BLS12-family curve restricted to
//! `a = 0`: this core rejects the general case at compile time rather than
//! guessing at the missing Jacobian-style algorithms. `G1` is the curve
//! over the base field `Fp`; `G2` is its sextic twist over `Fp2`, selected
//! by feature flag.

pub mod models;
pub use models::*;

#[cfg(feature = "bn254")]
pub mod bn254;
#[cfg(feature = "bls12_377")]
pub mod bls12_377;
#[cfg(feature = "bls12_381")]
pub mod bls12_381;
#[cfg(feature = "bn446")]
pub mod bn446;
#[cfg(feature = "fkm12_447")]
pub mod fkm12_447;
#[cfg(feature = "bls12_461")]
pub mod bls12_461;
#[cfg(feature = "bn462")]
pub mod bn462;
