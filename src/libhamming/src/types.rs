use crate::hamming::constant::{CODE_LEN, INFO_LEN, PARITY_LEN};
use bitvec::prelude::*;
use std::fmt;

pub type BVRep = BitVec<u8, Msb0>;
pub type BSRep = BitSlice<u8, Msb0>;

/// 1-indexed position of a bit within a codeword, 0 meaning "no error".
pub type ErrorPosition = usize;

/// The part a bit vector plays in the codec, which fixes its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  Data,
  Parity,
  Codeword,
  ErrorMask,
  Syndrome,
}

impl Role {
  pub const fn len(&self) -> usize {
    match self {
      Role::Data => INFO_LEN,
      Role::Parity | Role::Syndrome => PARITY_LEN,
      Role::Codeword | Role::ErrorMask => CODE_LEN,
    }
  }

  pub const fn name(&self) -> &'static str {
    match self {
      Role::Data => "data word",
      Role::Parity => "parity word",
      Role::Codeword => "codeword",
      Role::ErrorMask => "error mask",
      Role::Syndrome => "syndrome",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
