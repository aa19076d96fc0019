use thiserror::Error;

/// Errors raised by the codec. None of them is transient: a codec call either
/// yields a complete result or one of these, never a partial value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
  /// A vector does not have the fixed length its role requires.
  #[error("invalid length for {what}: expected {expected} bits, got {actual}")]
  InvalidLength {
    what: &'static str,
    expected: usize,
    actual: usize,
  },

  /// A digit other than 0 or 1 was supplied where a bit was expected.
  #[error("invalid bit value {value:?} at index {index}")]
  InvalidBitValue { index: usize, value: String },

  /// A 1-indexed bit position lies outside the vector.
  #[error("bit position {position} is out of range 1..={len}")]
  InvalidPosition { position: usize, len: usize },
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
