//! A 6-limb (384-bit) Montgomery-form prime field. Hosts `BLS12-377` and
//! `BLS12-381`.

impl_fp_model!(Fp384, BigInteger384, Fp384Parameters, 6, 12);
