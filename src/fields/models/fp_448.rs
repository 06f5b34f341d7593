//! A 7-limb (448-bit) Montgomery-form prime field. Hosts `BN446` and
//! `FKM12-447`.

impl_fp_model!(Fp448, BigInteger448, Fp448Parameters, 7, 14);
