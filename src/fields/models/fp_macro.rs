//! Generates one Montgomery-form prime field per limb width.
//!
//! A single `const N: usize` generic would be the obvious alternative, but
//! `#[unroll_for_loops]` cannot unroll a bound that isn't a literal at
//! macro-expansion time, so each limb width instead gets its own generated
//! module with the count baked in directly - which also lets the
//! Montgomery multiplication and reduction loops below be unrolled.

macro_rules! impl_fp_model {
    ($FpName:ident, $BigIntName:ident, $ParamsTrait:ident, $limbs:expr, $limbs2:expr) => {
        use crate::biginteger::$BigIntName as BigInt;
        use crate::fields::secret_bool::SecretBool;
        use crate::fields::{Field, PrimeField, SquareRootField};
        use core::marker::PhantomData;
        use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
        use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
        use unroll::unroll_for_loops;

        /// Compile-time parameters of a prime field.
        pub trait $ParamsTrait: 'static + Send + Sync + Sized {
            /// The field's characteristic, in its ordinary (non-Montgomery)
            /// representation.
            const MODULUS: BigInt;
            const MODULUS_BITS: u32;
            const REPR_SHAVE_BITS: u32;
            /// `2^(64 * LIMBS) mod MODULUS` - the Montgomery encoding of 1.
            const R: BigInt;
            /// `R^2 mod MODULUS` - used to Montgomery-encode a raw integer.
            const R2: BigInt;
            /// `-MODULUS^-1 mod 2^64`.
            const INV: u64;
            /// A fixed, non-Montgomery-encoded multiplicative generator.
            const GENERATOR: BigInt;
            const TWO_ADICITY: u32;
            /// A fixed `2^TWO_ADICITY`-th root of unity, non-Montgomery-encoded.
            const ROOT_OF_UNITY: BigInt;
            const MODULUS_MINUS_ONE_DIV_TWO: BigInt;
            /// `T`, where `MODULUS - 1 = 2^TWO_ADICITY * T` and `T` is odd.
            const T: BigInt;
            const T_MINUS_ONE_DIV_TWO: BigInt;
        }

        /// An element of `Fp`, stored in Montgomery form.
        #[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
        pub struct $FpName<P: $ParamsTrait>(
            pub(crate) BigInt,
            #[serde(skip)] pub(crate) PhantomData<P>,
        );

        impl<P: $ParamsTrait> $FpName<P> {
            pub const fn new(repr: BigInt) -> Self {
                Self(repr, PhantomData)
            }

            /// Square-and-always-multiply exponentiation; the multiply is a
            /// constant-time conditional select on each exponent bit, never
            /// a branch.
            fn pow(&self, exponent: &BigInt) -> Self {
                let mut res = Self::one();
                for limb in exponent.0.iter().rev() {
                    for i in (0..64).rev() {
                        res = res.square();
                        let bit = Choice::from(((limb >> i) & 1) as u8);
                        let tmp = res * *self;
                        res = Self::conditional_select(&res, &tmp, bit);
                    }
                }
                res
            }

            #[unroll_for_loops]
            fn mont_reduce_wide(mut t: [u64; $limbs2]) -> BigInt {
                for i in 0..$limbs {
                    let k = t[i].wrapping_mul(P::INV);
                    let mut carry: u128 = 0;
                    for j in 0..$limbs {
                        let hi_lo = (k as u128) * (P::MODULUS.0[j] as u128)
                            + (t[i + j] as u128)
                            + carry;
                        t[i + j] = hi_lo as u64;
                        carry = hi_lo >> 64;
                    }
                    let mut idx = i + $limbs;
                    while carry != 0 && idx < $limbs2 {
                        let sum = (t[idx] as u128) + carry;
                        t[idx] = sum as u64;
                        carry = sum >> 64;
                        idx += 1;
                    }
                }
                let mut out = [0u64; $limbs];
                out.copy_from_slice(&t[$limbs..$limbs2]);
                let out_big = BigInt(out);
                let mut trial = out_big;
                let borrow = trial.sub_noborrow(&P::MODULUS);
                let use_trial = Choice::from(1u8 - (borrow as u8));
                BigInt::conditional_select(&out_big, &trial, use_trial)
            }
        }

        impl<P: $ParamsTrait> Field for $FpName<P> {
            fn zero() -> Self {
                Self(BigInt::zero(), PhantomData)
            }

            fn is_zero(&self) -> SecretBool {
                SecretBool::from_choice(self.0.ct_eq(&BigInt::zero()))
            }

            fn one() -> Self {
                Self(P::R, PhantomData)
            }

            fn square(&self) -> Self {
                self.mul(*self)
            }

            fn inverse(&self) -> Self {
                // Fermat's little theorem: a^(p-2) = a^-1 for a != 0, and
                // 0^(p-2) = 0 for a == 0 - no branch on the input.
                let mut exponent = P::MODULUS;
                let mut two = BigInt::zero();
                two.0[0] = 2;
                exponent.sub_noborrow(&two);
                self.pow(&exponent)
            }
        }

        impl<P: $ParamsTrait> PrimeField for $FpName<P> {
            type BigInt = BigInt;

            fn from_repr(repr: BigInt) -> Self {
                let mut wide = [0u64; $limbs2];
                wide[..$limbs].copy_from_slice(&repr.0);
                let raw = Self(Self::mont_reduce_wide(wide), PhantomData);
                raw.mul(Self(P::R2, PhantomData))
            }

            fn into_repr(&self) -> BigInt {
                let mut wide = [0u64; $limbs2];
                wide[..$limbs].copy_from_slice(&self.0 .0);
                Self::mont_reduce_wide(wide)
            }

            const MODULUS_BITS: u32 = P::MODULUS_BITS;
        }

        impl<P: $ParamsTrait> SquareRootField for $FpName<P> {
            fn sqrt_if_square(&self) -> (Self, SecretBool) {
                // Generic Tonelli-Shanks. The tower/point arithmetic built
                // on top of this is what must be rigorously constant time,
                // so this favours a correct, readable implementation.
                let is_zero = self.is_zero();
                let euler = self.pow(&P::MODULUS_MINUS_ONE_DIV_TWO);
                let is_square = euler.equals(&Self::one()).or(is_zero);

                let mut z = Self(P::ROOT_OF_UNITY, PhantomData).mul(Self(P::R2, PhantomData));
                let w = self.pow(&P::T_MINUS_ONE_DIV_TWO);
                let mut x = w * *self;
                let mut b = x * w;
                let mut v = P::TWO_ADICITY as usize;

                for _ in 0..P::TWO_ADICITY {
                    let mut k = 0usize;
                    let mut b2k = b;
                    let mut found = b2k.equals(&Self::one());
                    for i in 1..v {
                        b2k = b2k.square();
                        let hit = b2k.equals(&Self::one());
                        let take = hit.and(found.not());
                        if take.declassify() {
                            k = i;
                        }
                        found = found.or(hit);
                    }

                    if k == 0 {
                        break;
                    }

                    let mut w2 = z;
                    for _ in 0..(v - k - 1) {
                        w2 = w2.square();
                    }
                    z = w2.square();
                    b = b * z;
                    x = x * w2;
                    v = k;
                }

                let result = Self::conditional_select(&Self::zero(), &x, is_zero.as_choice());
                (result, is_square)
            }
        }

        impl<P: $ParamsTrait> ConditionallySelectable for $FpName<P> {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self(BigInt::conditional_select(&a.0, &b.0, choice), PhantomData)
            }
        }

        impl<P: $ParamsTrait> ConstantTimeEq for $FpName<P> {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl<P: $ParamsTrait> PartialEq for $FpName<P> {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).unwrap_u8() == 1
            }
        }
        impl<P: $ParamsTrait> Eq for $FpName<P> {}

        impl<P: $ParamsTrait> Default for $FpName<P> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<P: $ParamsTrait> core::fmt::Debug for $FpName<P> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({:?})", stringify!($FpName), self.into_repr())
            }
        }

        impl<P: $ParamsTrait> Add<Self> for $FpName<P> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                let mut result = self.0;
                let carry = result.add_nocarry(&other.0);
                let mut trial = result;
                let borrow = trial.sub_noborrow(&P::MODULUS);
                let need_reduce = Choice::from((carry as u8) | (1u8 - (borrow as u8)));
                Self(BigInt::conditional_select(&result, &trial, need_reduce), PhantomData)
            }
        }
        impl<P: $ParamsTrait> Sub<Self> for $FpName<P> {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                let mut result = self.0;
                let borrow = result.sub_noborrow(&other.0);
                let mut corrected = result;
                corrected.add_nocarry(&P::MODULUS);
                let ctl = Choice::from(borrow as u8);
                Self(BigInt::conditional_select(&result, &corrected, ctl), PhantomData)
            }
        }
        impl<P: $ParamsTrait> Mul<Self> for $FpName<P> {
            type Output = Self;
            #[unroll_for_loops]
            fn mul(self, other: Self) -> Self {
                let mut wide = [0u64; $limbs2];
                for i in 0..$limbs {
                    let mut carry: u128 = 0;
                    for j in 0..$limbs {
                        let hi_lo = (self.0 .0[i] as u128) * (other.0 .0[j] as u128)
                            + (wide[i + j] as u128)
                            + carry;
                        wide[i + j] = hi_lo as u64;
                        carry = hi_lo >> 64;
                    }
                    wide[i + $limbs] = carry as u64;
                }
                Self(Self::mont_reduce_wide(wide), PhantomData)
            }
        }
        impl<P: $ParamsTrait> Neg for $FpName<P> {
            type Output = Self;
            fn neg(self) -> Self {
                let mut result = P::MODULUS;
                result.sub_noborrow(&self.0);
                let is_zero = self.0.ct_eq(&BigInt::zero());
                Self(BigInt::conditional_select(&result, &BigInt::zero(), is_zero), PhantomData)
            }
        }

        impl<'a, P: $ParamsTrait> Add<&'a Self> for $FpName<P> {
            type Output = Self;
            fn add(self, other: &'a Self) -> Self {
                self.add(*other)
            }
        }
        impl<'a, P: $ParamsTrait> Sub<&'a Self> for $FpName<P> {
            type Output = Self;
            fn sub(self, other: &'a Self) -> Self {
                self.sub(*other)
            }
        }
        impl<'a, P: $ParamsTrait> Mul<&'a Self> for $FpName<P> {
            type Output = Self;
            fn mul(self, other: &'a Self) -> Self {
                self.mul(*other)
            }
        }

        impl<P: $ParamsTrait> AddAssign<Self> for $FpName<P> {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }
        impl<P: $ParamsTrait> SubAssign<Self> for $FpName<P> {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
        impl<P: $ParamsTrait> MulAssign<Self> for $FpName<P> {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }
        impl<'a, P: $ParamsTrait> AddAssign<&'a Self> for $FpName<P> {
            fn add_assign(&mut self, other: &'a Self) {
                *self = *self + *other;
            }
        }
        impl<'a, P: $ParamsTrait> SubAssign<&'a Self> for $FpName<P> {
            fn sub_assign(&mut self, other: &'a Self) {
                *self = *self - *other;
            }
        }
        impl<'a, P: $ParamsTrait> MulAssign<&'a Self> for $FpName<P> {
            fn mul_assign(&mut self, other: &'a Self) {
                *self = *self * *other;
            }
        }
    };
}
