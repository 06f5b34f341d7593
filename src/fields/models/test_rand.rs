//! Test-only random sampling of field elements.
//!
//! This is deliberately minimal: rejection sampling against the modulus
//! for `Fp`, recursing component-wise for `Fp2`/`Fp6`. Not part of this
//! crate's public API or its constant-time envelope - nothing here is
//! reachable outside `#[cfg(test)]`.

use super::fp2::{Fp2, Fp2Parameters};
use super::fp6_3over2::{Fp6, Fp6Parameters};
use super::{fp_256::*, fp_384::*, fp_448::*, fp_512::*};
use crate::biginteger::{BigInteger256, BigInteger384, BigInteger448, BigInteger512};
use crate::fields::PrimeField;
use rand::RngCore;

pub(crate) trait TestRand: Sized {
    fn test_rand<R: RngCore>(rng: &mut R) -> Self;
}

macro_rules! impl_test_rand_for_fp {
    ($FpName:ident, $ParamsTrait:ident, $BigIntName:ident, $limbs:expr) => {
        impl<Pm: $ParamsTrait> TestRand for $FpName<Pm> {
            fn test_rand<R: RngCore>(rng: &mut R) -> Self {
                loop {
                    let mut limbs = [0u64; $limbs];
                    for limb in limbs.iter_mut() {
                        *limb = rng.next_u64();
                    }
                    let repr = $BigIntName::new(limbs);
                    if repr < Pm::MODULUS {
                        return Self::from_repr(repr);
                    }
                }
            }
        }
    };
}

impl_test_rand_for_fp!(Fp256, Fp256Parameters, BigInteger256, 4);
impl_test_rand_for_fp!(Fp384, Fp384Parameters, BigInteger384, 6);
impl_test_rand_for_fp!(Fp448, Fp448Parameters, BigInteger448, 7);
impl_test_rand_for_fp!(Fp512, Fp512Parameters, BigInteger512, 8);

impl<P: Fp2Parameters> TestRand for Fp2<P>
where
    P::Fp: TestRand,
{
    fn test_rand<R: RngCore>(rng: &mut R) -> Self {
        Self::new(P::Fp::test_rand(rng), P::Fp::test_rand(rng))
    }
}

impl<P: Fp6Parameters> TestRand for Fp6<P>
where
    Fp2<P::Fp2Params>: TestRand,
{
    fn test_rand<R: RngCore>(rng: &mut R) -> Self {
        Self::new(
            Fp2::<P::Fp2Params>::test_rand(rng),
            Fp2::<P::Fp2Params>::test_rand(rng),
            Fp2::<P::Fp2Params>::test_rand(rng),
        )
    }
}
