//! The values a front end owns and the simulator only reads.

use crate::error::*;
use libhamming::{types::Role, BitVector, ParityConvention};

/// Supplier of the three simulation inputs.
pub trait InputSource {
  /// Data bits in natural order, `d4 d3 d2 d1`.
  fn get_input_word(&self) -> BitVector;
  /// Error pattern indexed by codeword position 1..=7.
  fn get_error_mask(&self) -> BitVector;
  fn get_parity_convention(&self) -> ParityConvention;

  /// Copies all three inputs at once so a run never sees them change midway.
  fn snapshot(&self) -> Snapshot {
    Snapshot {
      input_word: self.get_input_word(),
      error_mask: self.get_error_mask(),
      convention: self.get_parity_convention(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
  pub input_word: BitVector,
  pub error_mask: BitVector,
  pub convention: ParityConvention,
}

impl InputSource for Snapshot {
  fn get_input_word(&self) -> BitVector {
    self.input_word.clone()
  }
  fn get_error_mask(&self) -> BitVector {
    self.error_mask.clone()
  }
  fn get_parity_convention(&self) -> ParityConvention {
    self.convention
  }
  fn snapshot(&self) -> Snapshot {
    self.clone()
  }
}

/// Editable inputs, the way the demo's clickable boxes hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
  input_word: BitVector,
  error_mask: BitVector,
  convention: ParityConvention,
}

impl Default for Inputs {
  fn default() -> Self {
    Inputs {
      input_word: BitVector::zeros(Role::Data.len()),
      error_mask: BitVector::zeros(Role::ErrorMask.len()),
      convention: ParityConvention::default(),
    }
  }
}

impl Inputs {
  pub fn new(
    input_word: BitVector,
    error_mask: BitVector,
    convention: ParityConvention,
  ) -> Result<Self> {
    let mut inputs = Inputs {
      convention,
      ..Default::default()
    };
    inputs.set_input_word(input_word)?;
    inputs.set_error_mask(error_mask)?;
    Ok(inputs)
  }

  pub fn set_input_word(&mut self, word: BitVector) -> Result<()> {
    word.expect_role(Role::Data)?;
    self.input_word = word;
    Ok(())
  }

  pub fn set_error_mask(&mut self, mask: BitVector) -> Result<()> {
    mask.expect_role(Role::ErrorMask)?;
    self.error_mask = mask;
    Ok(())
  }

  pub fn set_convention(&mut self, convention: ParityConvention) {
    self.convention = convention;
  }

  /// Toggles data bit `d{label}` (1..=4). The word is kept in natural order,
  /// so `d1` is its last element.
  pub fn toggle_data_bit(&mut self, label: usize) -> Result<()> {
    ensure!(
      (1..=Role::Data.len()).contains(&label),
      "data bit d{} does not exist",
      label
    );
    self
      .input_word
      .toggle_position(Role::Data.len() + 1 - label)?;
    Ok(())
  }

  /// Toggles the error bit over codeword position `position` (1..=7).
  pub fn toggle_error_bit(&mut self, position: usize) -> Result<()> {
    self
      .error_mask
      .toggle_position(position)
      .with_context(|| format!("no codeword position {}", position))
  }

  /// Clears data and error bits. The parity convention is kept.
  pub fn reset(&mut self) {
    let convention = self.convention;
    *self = Inputs {
      convention,
      ..Default::default()
    };
  }
}

impl InputSource for Inputs {
  fn get_input_word(&self) -> BitVector {
    self.input_word.clone()
  }
  fn get_error_mask(&self) -> BitVector {
    self.error_mask.clone()
  }
  fn get_parity_convention(&self) -> ParityConvention {
    self.convention
  }
}
