//! A 4-limb (256-bit) Montgomery-form prime field. Hosts `BN254`.

impl_fp_model!(Fp256, BigInteger256, Fp256Parameters, 4, 8);
