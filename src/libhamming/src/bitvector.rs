//! Fixed-length bit vectors shared by every stage of the codec.
//!
//! Two orders are in use. *Natural* order is how a word is read on screen,
//! most significant bit first (`d4 d3 d2 d1`). *Transmission* order is the
//! order the parity and codeword equations index into, least significant bit
//! first (`d1 d2 d3 d4`). The two differ by a reversal, see [`BitVector::reversed`].

use crate::{
  error::*,
  types::*,
  util::{bitdump_bitslice, msb_to_u32, u32_to_msb},
  BitDump,
};
use bitvec::prelude::*;
use std::{fmt, ops::Index, str::FromStr};

/// A sequence of bits. Every element is a `bool`, so a constructed value can
/// never hold anything but 0 or 1; lengths are checked against a [`Role`] at
/// each codec boundary.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector(BVRep);

impl BitVector {
  pub fn zeros(len: usize) -> Self {
    BitVector(bitvec![u8, Msb0; 0; len])
  }

  /// Builds a vector from digits, rejecting anything but 0 and 1.
  pub fn from_digits(digits: &[u8]) -> Result<Self> {
    let mut bv = BVRep::with_capacity(digits.len());
    for (index, digit) in digits.iter().enumerate() {
      match digit {
        0 => bv.push(false),
        1 => bv.push(true),
        other => {
          return Err(CodecError::InvalidBitValue {
            index,
            value: other.to_string(),
          })
        }
      }
    }
    Ok(BitVector(bv))
  }

  pub fn from_bitslice(bits: &BSRep) -> Self {
    BitVector(bits.to_bitvec())
  }

  /// `width` lowest bits of `value`, most significant first.
  pub fn from_value(value: u32, width: usize) -> Result<Self> {
    check_numeric_width(width)?;
    Ok(BitVector(u32_to_msb(value, width)))
  }

  /// A `len`-bit vector with only the 1-indexed `position` set.
  pub fn single(len: usize, position: usize) -> Result<Self> {
    let mut bv = Self::zeros(len);
    bv.toggle_position(position)?;
    Ok(bv)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<bool> {
    self.0.get(index).map(|bit| *bit)
  }

  pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
    self.0.iter().map(|bit| *bit)
  }

  pub fn digits(&self) -> Vec<u8> {
    self.iter().map(u8::from).collect()
  }

  pub fn count_ones(&self) -> usize {
    self.0.count_ones()
  }

  pub fn is_zero(&self) -> bool {
    self.0.not_any()
  }

  /// Numeric value with the first bit weighted highest.
  pub fn value(&self) -> Result<u32> {
    check_numeric_width(self.len())?;
    Ok(msb_to_u32(&self.0))
  }

  pub fn as_bitslice(&self) -> &BSRep {
    self.0.as_bitslice()
  }

  /// Converts between natural and transmission order.
  pub fn reversed(&self) -> Self {
    self.iter().rev().collect()
  }

  /// Element-wise XOR of two equal-length vectors.
  pub fn xor(&self, other: &Self) -> Result<Self> {
    if self.len() != other.len() {
      return Err(CodecError::InvalidLength {
        what: "xor operand",
        expected: self.len(),
        actual: other.len(),
      });
    }
    Ok(self.iter().zip(other.iter()).map(|(a, b)| a ^ b).collect())
  }

  /// Copy with the 0-indexed bit complemented.
  pub fn flipped(&self, index: usize) -> Result<Self> {
    let mut res = self.clone();
    res.toggle_position(index + 1)?;
    Ok(res)
  }

  /// Complements the bit at the 1-indexed `position`.
  pub fn toggle_position(&mut self, position: usize) -> Result<()> {
    if position == 0 || position > self.len() {
      return Err(CodecError::InvalidPosition {
        position,
        len: self.len(),
      });
    }
    let current = self.0[position - 1];
    self.0.set(position - 1, !current);
    Ok(())
  }

  pub(crate) fn set(&mut self, index: usize, value: bool) {
    self.0.set(index, value);
  }

  pub fn expect_role(&self, role: Role) -> Result<()> {
    if self.len() == role.len() {
      Ok(())
    } else {
      Err(CodecError::InvalidLength {
        what: role.name(),
        expected: role.len(),
        actual: self.len(),
      })
    }
  }
}

/// Widest vector that converts to and from a `u32`.
const MAX_NUMERIC_WIDTH: usize = u32::BITS as usize;

fn check_numeric_width(width: usize) -> Result<()> {
  if width > MAX_NUMERIC_WIDTH {
    return Err(CodecError::InvalidLength {
      what: "numeric conversion",
      expected: MAX_NUMERIC_WIDTH,
      actual: width,
    });
  }
  Ok(())
}

impl FromIterator<bool> for BitVector {
  fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
    BitVector(iter.into_iter().collect())
  }
}

impl Index<usize> for BitVector {
  type Output = bool;

  fn index(&self, index: usize) -> &bool {
    &self.0[index]
  }
}

impl FromStr for BitVector {
  type Err = CodecError;

  /// Parses a digit string such as `"0101"`.
  fn from_str(s: &str) -> Result<Self> {
    s.chars()
      .enumerate()
      .map(|(index, c)| match c {
        '0' => Ok(false),
        '1' => Ok(true),
        other => Err(CodecError::InvalidBitValue {
          index,
          value: other.to_string(),
        }),
      })
      .collect()
  }
}

impl BitDump for BitVector {
  fn bitdump(&self) -> String {
    bitdump_bitslice(self.0.as_bitslice())
  }
}

impl fmt::Display for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.bitdump())
  }
}

impl fmt::Debug for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("BitVector").field(&self.bitdump()).finish()
  }
}
