pub(crate) mod constant;
mod corrector;
mod layout;
mod parity;
mod syndrome;

use crate::{bitvector::BitVector, channel::apply_error, error::*, Code, Decoded, Encoded};
use constant::{CODE_LEN, INFO_LEN, LABEL_POSITIONS, PARITY_LEN, POSITION_LABELS};

pub use corrector::{correct, locate_error};
pub use layout::{assemble, disassemble};
pub use parity::{compute_parity, ParityConvention};
pub use syndrome::{check_syndrome, compute_syndrome, SyndromeCheck};

/// Hamming(7,4) with check bits at positions 1, 2 and 4. Holds nothing but the
/// parity convention, so copies are free and every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hamming74 {
  pub convention: ParityConvention,
}

impl Hamming74 {
  pub fn new(convention: ParityConvention) -> Self {
    Hamming74 { convention }
  }

  pub fn parity_len(&self) -> usize {
    PARITY_LEN
  }

  /// Label (`c1`, `d1`, ...) of a 1-indexed codeword position.
  pub fn label_of(position: usize) -> Option<&'static str> {
    position
      .checked_sub(1)
      .and_then(|idx| POSITION_LABELS.get(idx))
      .copied()
  }

  /// 1-indexed codeword position carrying `label`.
  pub fn position_of(label: &str) -> Option<usize> {
    LABEL_POSITIONS.get(label).copied()
  }
}

impl Code for Hamming74 {
  type Word = BitVector;

  fn code_len(&self) -> usize {
    CODE_LEN
  }

  fn info_len(&self) -> usize {
    INFO_LEN
  }

  fn encode(&self, info: &BitVector, error: &BitVector) -> Result<Encoded<BitVector>> {
    let parity = compute_parity(info, self.convention)?;
    let codeword = assemble(info, &parity)?;
    let errored = apply_error(&codeword, error)?;

    Ok(Encoded {
      parity,
      codeword,
      errored,
    })
  }

  fn decode(&self, received: &BitVector) -> Result<Decoded<BitVector>> {
    let check = check_syndrome(received, self.convention)?;
    let position = locate_error(&check.syndrome)?;
    let corrected = correct(received, position)?;
    let (info, _) = disassemble(&corrected)?;

    Ok(Decoded {
      info,
      received_info: check.received_data,
      received_parity: check.received_parity,
      recomputed_parity: check.recomputed_parity,
      syndrome: check.syndrome,
      position,
      corrected,
    })
  }
}
