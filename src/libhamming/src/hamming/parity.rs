use super::constant::PARITY_EQUATIONS;
use crate::{bitvector::BitVector, error::*, types::Role};
use std::fmt;

/// Whether check bits make their group's parity even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParityConvention {
  #[default]
  Even,
  Odd,
}

impl ParityConvention {
  pub fn from_even_flag(even_parity: bool) -> Self {
    if even_parity {
      ParityConvention::Even
    } else {
      ParityConvention::Odd
    }
  }

  pub fn is_even(&self) -> bool {
    matches!(self, ParityConvention::Even)
  }

  pub fn toggled(&self) -> Self {
    Self::from_even_flag(!self.is_even())
  }

  /// Constant added to every check equation.
  fn offset(&self) -> bool {
    !self.is_even()
  }
}

impl fmt::Display for ParityConvention {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(if self.is_even() { "even" } else { "odd" })
  }
}

/// Check bits `[c1, c2, c4]` for a data word given in transmission order.
pub fn compute_parity(data: &BitVector, convention: ParityConvention) -> Result<BitVector> {
  data.expect_role(Role::Data)?;
  Ok(
    PARITY_EQUATIONS
      .iter()
      .map(|eq| eq.iter().fold(convention.offset(), |acc, idx| acc ^ data[*idx]))
      .collect(),
  )
}
