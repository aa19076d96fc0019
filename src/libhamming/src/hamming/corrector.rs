use super::constant::CODE_LEN;
use crate::{bitvector::BitVector, error::*, types::*};

/// Position of the single flipped bit named by a syndrome `[s_c1, s_c2, s_c4]`,
/// weighted 1, 2 and 4. 0 means no error.
pub fn locate_error(syndrome: &BitVector) -> Result<ErrorPosition> {
  syndrome.expect_role(Role::Syndrome)?;
  Ok(syndrome.reversed().value()? as ErrorPosition)
}

/// Complements the bit at `position`; position 0 returns the word as is.
pub fn correct(received: &BitVector, position: ErrorPosition) -> Result<BitVector> {
  received.expect_role(Role::Codeword)?;
  match position {
    0 => Ok(received.clone()),
    p if p <= CODE_LEN => received.flipped(p - 1),
    p => Err(CodecError::InvalidPosition {
      position: p,
      len: CODE_LEN,
    }),
  }
}
