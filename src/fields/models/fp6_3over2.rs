//! The sextic tower extension `Fp6 = Fp2[v]/(v^3 - NONRESIDUE)`.
//!
//! A fixed cubic-extension non-residue of `1 + i` works for most curves,
//! but not all: whether `1 + i` is a cube in `Fp2` depends on the base
//! prime, and for some of the
//! registered curves (`BN254`, `BN462`, `BLS12-461`) it is one, so `v^3 =
//! 1+i` would not define a field there. This mirrors exactly the situation
//! `Fp2Parameters::NONRESIDUE` already resolves for the quadratic step (some
//! curves cannot use `-1`): `Fp6Parameters` likewise takes the cubic
//! non-residue as a per-curve constant rather than hard-coding `1 + i`. Every
//! curve that validly admits `1 + i` still sets `NONRESIDUE` to exactly that
//! value; the handful that cannot pick a different, verified non-cube in
//! `Fp2` (commonly `9 + i`, the standard choice for BN-family curves).

use super::fp2::{Fp2, Fp2Parameters};
use crate::fields::secret_bool::SecretBool;
use crate::fields::Field;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

pub trait Fp6Parameters: 'static + Send + Sync + Sized {
    type Fp2Params: Fp2Parameters;

    /// The cubic non-residue defining `v^3 = NONRESIDUE`.
    const NONRESIDUE: Fp2<Self::Fp2Params>;
}

type Fp2E<P> = Fp2<<P as Fp6Parameters>::Fp2Params>;

#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
pub struct Fp6<P: Fp6Parameters> {
    pub c0: Fp2E<P>,
    pub c1: Fp2E<P>,
    pub c2: Fp2E<P>,
    #[serde(skip)]
    _params: PhantomData<P>,
}

impl<P: Fp6Parameters> Fp6<P> {
    pub const fn new(c0: Fp2E<P>, c1: Fp2E<P>, c2: Fp2E<P>) -> Self {
        Self { c0, c1, c2, _params: PhantomData }
    }

    /// Multiplication by the cubic non-residue: shifts
    /// `(c0, c1, c2) -> (c2 * NONRESIDUE, c0, c1)`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c2 * P::NONRESIDUE, self.c0, self.c1)
    }
}

impl<P: Fp6Parameters> Field for Fp6<P> {
    fn zero() -> Self {
        Self::new(Fp2E::<P>::zero(), Fp2E::<P>::zero(), Fp2E::<P>::zero())
    }

    fn is_zero(&self) -> SecretBool {
        self.c0.is_zero().and(self.c1.is_zero()).and(self.c2.is_zero())
    }

    fn one() -> Self {
        Self::new(Fp2E::<P>::one(), Fp2E::<P>::zero(), Fp2E::<P>::zero())
    }

    fn square(&self) -> Self {
        // Chung-Hasan SQR2-style cubic-extension squaring: 6 Fp2
        // multiplications become 3 squarings and change-of-basis adds.
        let s0 = self.c0.square();
        let ab = self.c0 * self.c1;
        let s1 = ab.double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let bc = self.c1 * self.c2;
        let s3 = bc.double();
        let s4 = self.c2.square();

        let c0 = s0 + s3 * P::NONRESIDUE;
        let c1 = s1 + s4 * P::NONRESIDUE;
        let c2 = s1 + s2 + s3 - s0 - s4;
        Self::new(c0, c1, c2)
    }

    fn inverse(&self) -> Self {
        // Cubic-extension inverse formula (as in the cyclotomic-tower
        // literature this construction is drawn from).
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0 * self.c1;
        let t4 = self.c0 * self.c2;
        let t5 = self.c1 * self.c2;

        let c0 = t0 - t5 * P::NONRESIDUE;
        let c1 = t2 * P::NONRESIDUE - t3;
        let c2 = t1 - t4;

        let t6 = ((self.c0 * c0) + (self.c2 * c1) * P::NONRESIDUE + (self.c1 * c2) * P::NONRESIDUE)
            .inverse();

        Self::new(t6 * c0, t6 * c1, t6 * c2)
    }
}

impl<P: Fp6Parameters> ConditionallySelectable for Fp6<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp2E::<P>::conditional_select(&a.c0, &b.c0, choice),
            Fp2E::<P>::conditional_select(&a.c1, &b.c1, choice),
            Fp2E::<P>::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl<P: Fp6Parameters> ConstantTimeEq for Fp6<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<P: Fp6Parameters> PartialEq for Fp6<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1
    }
}
impl<P: Fp6Parameters> Eq for Fp6<P> {}

impl<P: Fp6Parameters> Default for Fp6<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: Fp6Parameters> core::fmt::Debug for Fp6<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fp6({:?} + {:?} v + {:?} v^2)", self.c0, self.c1, self.c2)
    }
}

impl<P: Fp6Parameters> Add<Self> for Fp6<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.c0 + other.c0, self.c1 + other.c1, self.c2 + other.c2)
    }
}
impl<P: Fp6Parameters> Sub<Self> for Fp6<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.c0 - other.c0, self.c1 - other.c1, self.c2 - other.c2)
    }
}
impl<P: Fp6Parameters> Neg for Fp6<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }
}
impl<P: Fp6Parameters> Mul<Self> for Fp6<P> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        // Karatsuba over the cubic basis: 6 Fp2 multiplications total.
        let v0 = self.c0 * other.c0;
        let v1 = self.c1 * other.c1;
        let v2 = self.c2 * other.c2;

        let c0 = v0 + ((self.c1 + self.c2) * (other.c1 + other.c2) - v1 - v2) * P::NONRESIDUE;
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1 + v2 * P::NONRESIDUE;
        let c2 = (self.c0 + self.c2) * (other.c0 + other.c2) - v0 - v2 + v1;

        Self::new(c0, c1, c2)
    }
}

impl<'a, P: Fp6Parameters> Add<&'a Self> for Fp6<P> {
    type Output = Self;
    fn add(self, other: &'a Self) -> Self {
        self.add(*other)
    }
}
impl<'a, P: Fp6Parameters> Sub<&'a Self> for Fp6<P> {
    type Output = Self;
    fn sub(self, other: &'a Self) -> Self {
        self.sub(*other)
    }
}
impl<'a, P: Fp6Parameters> Mul<&'a Self> for Fp6<P> {
    type Output = Self;
    fn mul(self, other: &'a Self) -> Self {
        self.mul(*other)
    }
}

impl<P: Fp6Parameters> AddAssign<Self> for Fp6<P> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl<P: Fp6Parameters> SubAssign<Self> for Fp6<P> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl<P: Fp6Parameters> MulAssign<Self> for Fp6<P> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl<'a, P: Fp6Parameters> AddAssign<&'a Self> for Fp6<P> {
    fn add_assign(&mut self, other: &'a Self) {
        *self = *self + *other;
    }
}
impl<'a, P: Fp6Parameters> SubAssign<&'a Self> for Fp6<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self = *self - *other;
    }
}
impl<'a, P: Fp6Parameters> MulAssign<&'a Self> for Fp6<P> {
    fn mul_assign(&mut self, other: &'a Self) {
        *self = *self * *other;
    }
}
