//! Complete, constant-time short-Weierstrass point arithmetic in projective
//! coordinates, parameterised by a compile-time curve: curve choice is a
//! type-level decision, never a runtime configuration surface. Every
//! operation here is alias-safe, exception-free and straight-line: no
//! branch, loop count, or memory access pattern may depend on the
//! coordinates of a point or the value of a `SecretBool`.
//!
//! Restricted, by construction, to curves `y^2 = x^3 + b`: there is no
//! `COEFF_A` slot on [`SWModelParameters`], so a curve with `a != 0` simply
//! cannot be expressed here. Extending this to `a = -3` or general `a`
//! would mean implementing RCB Algorithms 4/6 or 1/3, deferred rather than
//! guessed at.

use crate::fields::secret_bool::SecretBool;
use crate::fields::{Field, SquareRootField};
use core::marker::PhantomData;
use derivative::Derivative;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The field(s) a curve's points are coordinatised over.
pub trait ModelParameters: 'static + Send + Sync + Sized + Eq + Copy {
    type BaseField: Field + SquareRootField;
}

/// Which sextic twist construction a curve's `G2` is, governing where the
/// sextic non-residue enters the complete-addition/doubling formulas.
/// `None` is used by `G1` (and any non-twisted curve): no adjustment is
/// applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TwistType {
    None,
    M,
    D,
}

/// Compile-time parameters of a short-Weierstrass curve `y^2 = x^3 + b`.
/// `TWIST_TYPE` is `None` for `G1`; `M` or `D` for a `G2` whose coordinate
/// field is a sextic twist.
pub trait SWModelParameters: ModelParameters {
    const COEFF_B: Self::BaseField;
    const TWIST_TYPE: TwistType;

    /// Multiplies a base-field element by the sextic non-residue used to
    /// twist `G2`'s curve equation. Only meaningful (and only called) when
    /// `TWIST_TYPE != None`; curves with no twist never invoke it.
    fn mul_by_sextic_nonresidue(_fe: &Self::BaseField) -> Self::BaseField {
        unimplemented!("mul_by_sextic_nonresidue is only defined for twisted (G2) curves")
    }

    /// Multiplies by the inverse of the sextic non-residue. `double`'s
    /// `D`-twist branch needs this (the doubling formula has no cross terms
    /// to absorb a forward multiply by `xi` the way `sum`/`madd` do), so it
    /// is derived from `mul_by_sextic_nonresidue` rather than given its own
    /// per-curve constant.
    fn mul_by_sextic_nonresidue_inv(fe: &Self::BaseField) -> Self::BaseField {
        *fe * Self::mul_by_sextic_nonresidue(&Self::BaseField::one()).inverse()
    }
}

/// A projective point `(X, Y, Z)` with affine image `(X/Z, Y/Z)`.
/// The point at infinity is any `(0, *, 0)`; its canonical form is
/// `(0, 1, 0)`. The representation is not unique: `(lX, lY, lZ)` for any
/// nonzero `l` denotes the same affine point.
#[derive(Derivative)]
#[derivative(Copy(bound = ""), Clone(bound = ""), Debug(bound = ""))]
pub struct GroupProjective<P: SWModelParameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

/// The affine companion type `(x, y)` with `y^2 = x^3 + b`. There
/// is no explicit infinity representation here; callers encode infinity out
/// of band or avoid storing it in affine form.
#[derive(Derivative)]
#[derivative(
    Copy(bound = ""),
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct GroupAffine<P: SWModelParameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: SWModelParameters> GroupAffine<P> {
    pub fn new(x: P::BaseField, y: P::BaseField) -> Self {
        Self { x, y, _params: PhantomData }
    }
}

impl<P: SWModelParameters> ConditionallySelectable for GroupAffine<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::BaseField::conditional_select(&a.x, &b.x, choice),
            P::BaseField::conditional_select(&a.y, &b.y, choice),
        )
    }
}

impl<P: SWModelParameters> GroupProjective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self { x, y, z, _params: PhantomData }
    }

    /// The canonical point at infinity, `(0, 1, 0)`.
    pub fn infinity() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::one(), P::BaseField::zero())
    }

    pub fn set_infinity(&mut self) {
        *self = Self::infinity();
    }

    /// `X = 0 /\ Z = 0`, computed without branching.
    pub fn is_infinity(&self) -> SecretBool {
        self.x.is_zero().and(self.z.is_zero())
    }

    /// Conditionally overwrites `self` with `other` in constant time.
    pub fn ccopy(&mut self, other: &Self, ctl: SecretBool) {
        self.x.ccopy(&other.x, ctl);
        self.y.ccopy(&other.y, ctl);
        self.z.ccopy(&other.z, ctl);
    }

    /// `(X, Y, Z) -> (X, -Y, Z)`.
    pub fn neg(&self) -> Self {
        Self::new(self.x, self.y.neg(), self.z)
    }

    pub fn neg_in_place(&mut self) {
        *self = self.neg();
    }

    /// Negates `Y` iff `ctl` is true, in constant time.
    pub fn cneg(&mut self, ctl: SecretBool) {
        let negated = self.neg();
        self.ccopy(&negated, ctl);
    }

    /// `X1 Z2 = X2 Z1 /\ Y1 Z2 = Y2 Z1`, both cross-multiplications always
    /// performed (no early exit on the first mismatch).
    pub fn equals(&self, other: &Self) -> SecretBool {
        let x1z2 = self.x * other.z;
        let x2z1 = other.x * self.z;
        let y1z2 = self.y * other.z;
        let y2z1 = other.y * self.z;
        x1z2.equals(&x2z1).and(y1z2.equals(&y2z1))
    }

    /// Renes-Costello-Batina 2015, Algorithm 7, specialised to `a = 0`: a
    /// complete addition formula, correct (with no branch) on every input
    /// pair, including `P = Q`, `P = -Q`, and either operand at infinity.
    pub fn sum(&self, other: &Self) -> Self {
        let b3 = double_and_add(P::COEFF_B); // 3b = b + 2b
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);

        let mut t0 = x1 * x2; // t0 = X1 X2
        let mut t1 = y1 * y2; // t1 = Y1 Y2
        let mut t2 = z1 * z2; // t2 = Z1 Z2
        let mut t3 = (x1 + y1) * (x2 + y2) - t0 - t1; // t3 = X1Y2 + X2Y1
        let mut t4 = (y1 + z1) * (y2 + z2) - t1 - t2; // t4 = Y1Z2 + Y2Z1
        let t5 = (x1 + z1) * (x2 + z2) - t0 - t2; // t5 = X1Z2 + X2Z1

        match P::TWIST_TYPE {
            TwistType::D => {
                t0 = P::mul_by_sextic_nonresidue(&t0);
                t1 = P::mul_by_sextic_nonresidue(&t1);
                t3 = P::mul_by_sextic_nonresidue(&t3);
                t4 = P::mul_by_sextic_nonresidue(&t4);
            },
            TwistType::M | TwistType::None => {},
        }

        let mut t2_b3 = t2 * b3; // t2 = 3b Z1Z2
        let mut y3_b3 = t5 * b3; // y3 = 3b (X1Z2+X2Z1)

        if let TwistType::M = P::TWIST_TYPE {
            t2_b3 = P::mul_by_sextic_nonresidue(&t2_b3);
            y3_b3 = P::mul_by_sextic_nonresidue(&y3_b3);
        }

        let x3 = t3 * (t1 - t2_b3) - t4 * y3_b3;
        let y3 = (t1 + t2_b3) * (t1 - t2_b3) + (t0 + t0 + t0) * y3_b3;
        let z3 = t4 * (t1 + t2_b3) + (t0 + t0 + t0) * t3;

        Self::new(x3, y3, z3)
    }

    /// Renes-Costello-Batina 2015, Algorithm 8: the same complete addition
    /// with `Z2 = 1` specialised out, for adding an affine point.
    pub fn madd(&self, other: &GroupAffine<P>) -> Self {
        let b3 = double_and_add(P::COEFF_B);
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2) = (other.x, other.y);

        let mut t0 = x1 * x2; // t0 = X1 X2
        let mut t1 = y1 * y2; // t1 = Y1 Y2
        let t2 = z1; // t2 = Z1 (since Z2 = 1)
        let mut t3 = (x1 + y1) * (x2 + y2) - t0 - t1; // t3 = X1Y2 + X2Y1
        let mut t4 = y2 * z1 + y1; // t4 = Y1Z2 + Y2Z1 = Y2 Z1 + Y1
        let t5 = x2 * z1 + x1; // t5 = X1Z2 + X2Z1 = X2 Z1 + X1

        match P::TWIST_TYPE {
            TwistType::D => {
                t0 = P::mul_by_sextic_nonresidue(&t0);
                t1 = P::mul_by_sextic_nonresidue(&t1);
                t3 = P::mul_by_sextic_nonresidue(&t3);
                t4 = P::mul_by_sextic_nonresidue(&t4);
            },
            TwistType::M | TwistType::None => {},
        }

        let mut t2_b3 = t2 * b3; // t2 = 3b Z1 (Z2 = 1)
        let mut y3_b3 = t5 * b3; // y3 = 3b (X1 + X2 Z1)

        if let TwistType::M = P::TWIST_TYPE {
            t2_b3 = P::mul_by_sextic_nonresidue(&t2_b3);
            y3_b3 = P::mul_by_sextic_nonresidue(&y3_b3);
        }

        let x3 = t3 * (t1 - t2_b3) - t4 * y3_b3;
        let y3 = (t1 + t2_b3) * (t1 - t2_b3) + (t0 + t0 + t0) * y3_b3;
        let z3 = t4 * (t1 + t2_b3) + (t0 + t0 + t0) * t3;

        Self::new(x3, y3, z3)
    }

    /// Renes-Costello-Batina 2015, Algorithm 9, specialised to `a = 0`: a
    /// complete doubling formula, correct (with no branch) including on
    /// infinity.
    ///
    /// Unlike `sum`/`madd`, doubling has no `X1Y2`-style cross term for the
    /// non-residue to land on, so the twist adjustment instead lands on
    /// `t2 = 3bZ^2`: an `M`-twist scales it by `xi`, a `D`-twist by `xi^-1`.
    pub fn double(&self) -> Self {
        let b3 = double_and_add(P::COEFF_B);
        let (x, y, z) = (self.x, self.y, self.z);

        let t0 = y.square(); // t0 = Y^2
        let mut z3 = t0.double().double().double(); // 8 t0

        let t1 = y * z;
        let mut t2 = z.square() * b3; // 3b Z^2
        match P::TWIST_TYPE {
            TwistType::M => t2 = P::mul_by_sextic_nonresidue(&t2),
            TwistType::D => t2 = P::mul_by_sextic_nonresidue_inv(&t2),
            TwistType::None => {},
        }

        let mut x3 = t2 * z3;
        let mut y3 = t0 + t2;
        z3 = t1 * z3;

        let t1 = t2.double();
        let t2 = t1 + t2;
        let t0 = t0 - t2;

        y3 = t0 * y3;
        y3 = x3 + y3;
        let t1 = x * y;
        x3 = t0 * t1;
        x3 = x3.double();

        Self::new(x3, y3, z3)
    }

    pub fn double_in_place(&mut self) {
        *self = self.double();
    }

    /// `R = P + (-Q)`. Alias-safe even when `R` and `Q` share storage: `Q`
    /// is negated into a local temporary before the call to `sum`.
    pub fn diff(&self, other: &Self) -> Self {
        self.sum(&other.neg())
    }

    /// Converts to affine. Undefined if `self` is infinity - callers must
    /// check `is_infinity` first.
    pub fn to_affine(&self) -> GroupAffine<P> {
        let z_inv = self.z.inverse();
        GroupAffine::new(self.x * z_inv, self.y * z_inv)
    }

    pub fn from_affine(affine: &GroupAffine<P>) -> Self {
        Self::new(affine.x, affine.y, P::BaseField::one())
    }

    /// Montgomery's batched inversion, infinity-safe: one field inversion
    /// plus `3(N-1)` multiplications
    /// regardless of how many of the `N` inputs are infinity. Infinite
    /// entries map to the sentinel `(0, 0)`.
    pub fn batch_to_affine(points: &[Self]) -> Vec<GroupAffine<P>> {
        let n = points.len();
        if n == 0 {
            return Vec::new();
        }

        let mut zeroes = Vec::with_capacity(n);
        let mut acc = Vec::with_capacity(n);

        let mut running = P::BaseField::one();
        for p in points {
            let is_zero = p.z.is_zero();
            zeroes.push(is_zero);
            // Substitute 1 for a zero Z so the running product is never
            // tainted by an infinite point.
            let mut z_or_one = p.z;
            z_or_one.ccopy(&P::BaseField::one(), is_zero);
            running *= z_or_one;
            acc.push(running);
        }

        let mut acc_inv = running.inverse();

        let mut out = vec![GroupAffine::new(P::BaseField::zero(), P::BaseField::zero()); n];
        for i in (0..n).rev() {
            let prev_acc = if i == 0 { P::BaseField::one() } else { acc[i - 1] };
            let mut inv_i = acc_inv * prev_acc;
            inv_i.cset_zero(zeroes[i]);

            out[i] = GroupAffine::new(points[i].x * inv_i, points[i].y * inv_i);

            let mut z_or_one = points[i].z;
            z_or_one.ccopy(&P::BaseField::one(), zeroes[i]);
            acc_inv *= z_or_one;
        }

        out
    }

    /// Attempts to find a `y` with `y^2 = x^3 + b`. On success, `self` is
    /// assigned `(x, y, 1)`. Communicates failure only via the returned
    /// `SecretBool`; both branches of the square root execute unconditionally.
    pub fn try_set_from_x(&mut self, x: P::BaseField) -> SecretBool {
        self.try_set_from_x_and_z(x, P::BaseField::one())
    }

    /// As `try_set_from_x`, but scales the resulting projective point by `z`:
    /// on success, `self = (x * z, y * z, z)`, which still represents the
    /// affine point `(x, y)`.
    pub fn try_set_from_x_and_z(&mut self, x: P::BaseField, z: P::BaseField) -> SecretBool {
        let rhs = x.square() * x + P::COEFF_B;
        let (y, is_square) = rhs.sqrt_if_square();

        let candidate = Self::new(x * z, y * z, z);
        self.ccopy(&candidate, is_square);
        is_square
    }
}

/// `2a` via `Field::double`, used to build `3b`, `24b`, `8Y^3Z`, ... from a
/// base value without a `From<u64>` bound on `Field`.
#[inline]
fn double_and_add<F: Field>(a: F) -> F {
    a.double() + a
}

impl<P: SWModelParameters> ConditionallySelectable for GroupProjective<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::BaseField::conditional_select(&a.x, &b.x, choice),
            P::BaseField::conditional_select(&a.y, &b.y, choice),
            P::BaseField::conditional_select(&a.z, &b.z, choice),
        )
    }
}

impl<P: SWModelParameters> ConstantTimeEq for GroupProjective<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.equals(other).as_choice()
    }
}

impl<P: SWModelParameters> Default for GroupProjective<P> {
    fn default() -> Self {
        Self::infinity()
    }
}
