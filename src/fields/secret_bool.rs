//! A secret, data-carrying boolean.
//!
//! `SecretBool` is the only way operations in this crate communicate a
//! condition derived from secret data (point equality, infinity detection,
//! square-root existence, ...). It intentionally has **no** `Into<bool>`
//! or `if`-friendly conversion in its normal API: the only way to turn it
//! into a branching `bool` is the explicit [`SecretBool::declassify`],
//! which marks the one place a caller opts out of secrecy (typically a
//! test assertion or a caller-level policy decision, never an internal
//! control-flow branch inside this crate).

use subtle::Choice;

#[derive(Copy, Clone, Debug)]
pub struct SecretBool(Choice);

impl SecretBool {
    pub const fn from_choice(choice: Choice) -> Self {
        Self(choice)
    }

    pub fn as_choice(&self) -> Choice {
        self.0
    }

    pub fn truthy() -> Self {
        Self(Choice::from(1u8))
    }

    pub fn falsy() -> Self {
        Self(Choice::from(0u8))
    }

    /// Non-branching logical AND.
    pub fn and(&self, other: SecretBool) -> SecretBool {
        SecretBool(self.0 & other.0)
    }

    /// Non-branching logical OR.
    pub fn or(&self, other: SecretBool) -> SecretBool {
        SecretBool(self.0 | other.0)
    }

    /// Non-branching logical NOT.
    pub fn not(&self) -> SecretBool {
        SecretBool(!self.0)
    }

    /// The single declassification boundary: converts to a branching
    /// `bool`. Use only at an API edge (tests, caller-level decisions),
    /// never inside this crate's own operations.
    pub fn declassify(self) -> bool {
        self.0.unwrap_u8() == 1
    }
}

impl From<Choice> for SecretBool {
    fn from(choice: Choice) -> Self {
        Self(choice)
    }
}

impl From<SecretBool> for Choice {
    fn from(b: SecretBool) -> Self {
        b.0
    }
}
