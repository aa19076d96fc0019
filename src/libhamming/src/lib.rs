//! Hamming(7,4) single-error-correcting codec.
//!
//! The pipeline is a chain of pure functions over [`BitVector`]s:
//! [`compute_parity`] and [`assemble`] encode, [`apply_error`] injects a
//! channel fault, [`compute_syndrome`], [`locate_error`] and [`correct`] decode.
//! [`Hamming74`] bundles them behind the [`Code`] trait.

mod bitvector;
mod channel;
mod error;
mod hamming;
pub mod types;
mod util;

pub use bitvector::BitVector;
pub use channel::apply_error;
pub use error::{CodecError, Result};
pub use hamming::{
  assemble, check_syndrome, compute_parity, compute_syndrome, correct, disassemble, locate_error,
  Hamming74, ParityConvention, SyndromeCheck,
};
pub use util::bitdump_bitslice;

pub trait Code {
  type Word;

  fn code_len(&self) -> usize;
  fn info_len(&self) -> usize;

  /// Encodes `info` and sends the codeword through a channel applying `error`.
  fn encode(&self, info: &Self::Word, error: &Self::Word) -> Result<Encoded<Self::Word>>;
  fn decode(&self, received: &Self::Word) -> Result<Decoded<Self::Word>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<T> {
  pub parity: T,
  pub codeword: T,
  pub errored: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
  pub info: T,
  /// Data bits as received, before correction.
  pub received_info: T,
  pub received_parity: T,
  /// Check bits recomputed from `received_info`.
  pub recomputed_parity: T,
  pub syndrome: T,
  pub position: types::ErrorPosition,
  pub corrected: T,
}

pub trait BitDump {
  fn bitdump(&self) -> String;
}
