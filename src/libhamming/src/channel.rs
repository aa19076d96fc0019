use crate::{bitvector::BitVector, error::*, types::Role};

/// Simulates a faulty link by XORing `mask` onto `codeword`.
pub fn apply_error(codeword: &BitVector, mask: &BitVector) -> Result<BitVector> {
  codeword.expect_role(Role::Codeword)?;
  mask.expect_role(Role::ErrorMask)?;
  codeword.xor(mask)
}
