//! Fixed-width multiprecision integers used as the limb storage for the
//! Montgomery-form prime fields in `fields::models`.
//!
//! These are plain, non-Montgomery integers: comparison, addition-with-carry
//! and subtraction-with-borrow only, in constant time. The Montgomery
//! reduction itself lives next to each `Fp*` model, since it additionally
//! needs the curve-specific modulus and inverse constant.

use core::cmp::Ordering;
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use unroll::unroll_for_loops;

macro_rules! impl_big_integer {
    ($name:ident, $limbs:expr) => {
        #[derive(Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub [u64; $limbs]);

        impl $name {
            pub const NUM_LIMBS: usize = $limbs;

            pub const fn new(limbs: [u64; $limbs]) -> Self {
                Self(limbs)
            }

            pub const fn zero() -> Self {
                Self([0u64; $limbs])
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&limb| limb == 0)
            }

            /// `self += other`, returning the carry out of the top limb.
            #[inline]
            #[unroll_for_loops]
            pub fn add_nocarry(&mut self, other: &Self) -> u64 {
                let mut carry = 0u64;
                for i in 0..$limbs {
                    let (sum, c) = adc(self.0[i], other.0[i], carry);
                    self.0[i] = sum;
                    carry = c;
                }
                carry
            }

            /// `self -= other`, returning the borrow out of the top limb.
            #[inline]
            #[unroll_for_loops]
            pub fn sub_noborrow(&mut self, other: &Self) -> u64 {
                let mut borrow = 0u64;
                for i in 0..$limbs {
                    let (diff, b) = sbb(self.0[i], other.0[i], borrow);
                    self.0[i] = diff;
                    borrow = b;
                }
                borrow
            }

            /// Divides the magnitude by two in place, shifting in zero at the top.
            #[inline]
            pub fn div2(&mut self) {
                let mut t = 0u64;
                for limb in self.0.iter_mut().rev() {
                    let t2 = *limb << 63;
                    *limb >>= 1;
                    *limb |= t;
                    t = t2;
                }
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                for i in (0..$limbs).rev() {
                    if self.0[i] < other.0[i] {
                        return Ordering::Less;
                    } else if self.0[i] > other.0[i] {
                        return Ordering::Greater;
                    }
                }
                Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                let mut out = [0u64; $limbs];
                for i in 0..$limbs {
                    out[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
                }
                Self(out)
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                let mut acc = Choice::from(1u8);
                for i in 0..$limbs {
                    acc &= self.0[i].ct_eq(&other.0[i]);
                }
                acc
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x")?;
                for limb in self.0.iter().rev() {
                    write!(f, "{:016x}", limb)?;
                }
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }
    };
}

impl_big_integer!(BigInteger256, 4);
impl_big_integer!(BigInteger384, 6);
impl_big_integer!(BigInteger448, 7);
impl_big_integer!(BigInteger512, 8);

/// Add-with-carry on a single limb pair.
#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let r = (a as u128) + (b as u128) + (carry as u128);
    (r as u64, (r >> 64) as u64)
}

/// Subtract-with-borrow on a single limb pair.
#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let r = (a as i128) - (b as i128) - (borrow as i128);
    if r < 0 {
        ((r + (1i128 << 64)) as u64, 1)
    } else {
        (r as u64, 0)
    }
}
