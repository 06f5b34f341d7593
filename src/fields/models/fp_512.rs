//! An 8-limb (512-bit) Montgomery-form prime field. Hosts `BLS12-461` and
//! `BN462`.

impl_fp_model!(Fp512, BigInteger512, Fp512Parameters, 8, 16);
