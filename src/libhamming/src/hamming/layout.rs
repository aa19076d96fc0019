use super::constant::{CODE_LEN, DATA_SLOTS, PARITY_SLOTS};
use crate::{bitvector::BitVector, error::*, types::Role};

/// Interleaves data and check bits as `c1 c2 d1 c4 d2 d3 d4`.
pub fn assemble(data: &BitVector, parity: &BitVector) -> Result<BitVector> {
  data.expect_role(Role::Data)?;
  parity.expect_role(Role::Parity)?;

  let mut cw = BitVector::zeros(CODE_LEN);
  DATA_SLOTS
    .iter()
    .zip(data.iter())
    .chain(PARITY_SLOTS.iter().zip(parity.iter()))
    .for_each(|(slot, bit)| cw.set(*slot, bit));
  Ok(cw)
}

/// Splits a codeword back into `(data, parity)`.
pub fn disassemble(codeword: &BitVector) -> Result<(BitVector, BitVector)> {
  codeword.expect_role(Role::Codeword)?;

  let data: BitVector = DATA_SLOTS.iter().map(|slot| codeword[*slot]).collect();
  let parity: BitVector = PARITY_SLOTS.iter().map(|slot| codeword[*slot]).collect();
  Ok((data, parity))
}
