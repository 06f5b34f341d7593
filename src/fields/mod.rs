//! Tower-field arithmetic: the base field `Fp` contract this core consumes,
//! and the quadratic (`Fp2`) and sextic (`Fp6`) extensions this core builds
//! on top of it.

use crate::fields::secret_bool::SecretBool;
use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{ConditionallySelectable, ConstantTimeEq};

pub mod secret_bool;

pub mod models;

pub use models::fp_256::*;
pub use models::fp_384::*;
pub use models::fp_448::*;
pub use models::fp_512::*;
pub use models::fp2::*;
pub use models::fp6_3over2::*;

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

/// The contract every field element type in this core satisfies:
/// `Fp`, `Fp2` and `Fp6` all implement it.
///
/// All operations are constant time and total. There is no fallible
/// variant anywhere on this trait: inversion of zero is the one
/// documented precondition violation, and it must not branch or leak,
/// not raise an error.
pub trait Field:
    Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + Eq
    + ConstantTimeEq
    + ConditionallySelectable
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// Secret-boolean test for the additive identity.
    fn is_zero(&self) -> SecretBool;

    /// The multiplicative identity.
    fn one() -> Self;

    fn double(&self) -> Self {
        *self + *self
    }

    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    fn square(&self) -> Self;

    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Multiplicative inverse. Precondition: `self != 0`. On a zero input
    /// the result is an unspecified but well-formed field element and the
    /// computation must not branch or take a data-dependent amount of time.
    fn inverse(&self) -> Self;

    fn inverse_in_place(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Conditionally overwrites `self` with `other` in constant time.
    fn ccopy(&mut self, other: &Self, ctl: SecretBool) {
        *self = Self::conditional_select(self, other, ctl.as_choice());
    }

    /// Conditionally negates `self` in constant time.
    fn cneg(&mut self, ctl: SecretBool) {
        let negated = self.neg();
        self.ccopy(&negated, ctl);
    }

    fn cset_zero(&mut self, ctl: SecretBool) {
        let zero = Self::zero();
        self.ccopy(&zero, ctl);
    }

    fn cset_one(&mut self, ctl: SecretBool) {
        let one = Self::one();
        self.ccopy(&one, ctl);
    }

    /// Secret-boolean equality.
    fn equals(&self, other: &Self) -> SecretBool {
        SecretBool::from_choice(self.ct_eq(other))
    }
}

/// A prime field `Fp`, giving access to its raw (non-Montgomery)
/// representation and square-root machinery.
pub trait PrimeField: Field + SquareRootField {
    type BigInt: Copy + Clone + Debug + Eq;

    /// Loads an element from its raw (unchecked) representation, i.e.
    /// without taking it modulo the field's characteristic.
    fn from_repr(repr: Self::BigInt) -> Self;

    /// The element's raw (non-Montgomery) representation.
    fn into_repr(&self) -> Self::BigInt;

    const MODULUS_BITS: u32;
}

/// Square-root support, shared by `Fp`, `Fp2` and `Fp6`.
pub trait SquareRootField: Field {
    /// Attempts a principal square root. Returns a `SecretBool` signalling
    /// success; on failure `self` is left holding an unspecified but valid
    /// field element. Both branches of the underlying computation execute
    /// unconditionally - this never branches on whether `self` happens to
    /// be a square.
    fn sqrt_if_square(&self) -> (Self, SecretBool);
}
