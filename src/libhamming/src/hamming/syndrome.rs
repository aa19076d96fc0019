use super::{layout::disassemble, parity::*};
use crate::{bitvector::BitVector, error::*};

/// Everything the syndrome generator looks at, transmission order throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndromeCheck {
  pub received_data: BitVector,
  /// c1 c2 c4 as carried by the codeword
  pub received_parity: BitVector,
  /// c1' c2' c4' recomputed from the received data
  pub recomputed_parity: BitVector,
  pub syndrome: BitVector,
}

/// Checks a received codeword against itself: recomputes the check bits from
/// its data bits and XORs them with the check bits it carries.
pub fn check_syndrome(received: &BitVector, convention: ParityConvention) -> Result<SyndromeCheck> {
  let (received_data, received_parity) = disassemble(received)?;
  let recomputed_parity = compute_parity(&received_data, convention)?;
  let syndrome = recomputed_parity.xor(&received_parity)?;
  Ok(SyndromeCheck {
    received_data,
    received_parity,
    recomputed_parity,
    syndrome,
  })
}

pub fn compute_syndrome(received: &BitVector, convention: ParityConvention) -> Result<BitVector> {
  Ok(check_syndrome(received, convention)?.syndrome)
}
