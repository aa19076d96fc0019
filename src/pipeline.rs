use crate::{
  board::{BitBoard, Group},
  inputs::{InputSource, Snapshot},
};
use hashlink::LinkedHashMap;
use libhamming::{types::*, BitDump, BitVector, Code, Hamming74, Result};
use tracing::debug;

/// Every value one run of the encoder, channel and decoder produced.
///
/// `data`, `received_data` and `corrected_data` are in natural order as
/// displayed; all other vectors are in transmission (positional) order. The
/// three parity words are `[c1, c2, c4]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
  pub inputs: Snapshot,
  pub data: BitVector,
  pub parity: BitVector,
  pub codeword: BitVector,
  pub received_codeword: BitVector,
  /// Data bits of `received_codeword`, uncorrected.
  pub received_data: BitVector,
  pub received_parity: BitVector,
  /// Check bits the decoder recomputed from `received_data`.
  pub recomputed_parity: BitVector,
  pub syndrome: BitVector,
  pub error_position: ErrorPosition,
  pub corrected_codeword: BitVector,
  pub corrected_data: BitVector,
}

impl Simulation {
  /// Whether the decoder handed back the word that was sent.
  pub fn recovered(&self) -> bool {
    self.corrected_data == self.data
  }

  pub fn groups(&self) -> LinkedHashMap<Group, BitVector> {
    Group::ALL
      .iter()
      .map(|group| (*group, self.group(*group).clone()))
      .collect()
  }

  pub fn group(&self, group: Group) -> &BitVector {
    match group {
      Group::Data => &self.data,
      Group::Parity => &self.parity,
      Group::Codeword => &self.codeword,
      Group::ReceivedCodeword => &self.received_codeword,
      Group::Syndrome => &self.syndrome,
      Group::CorrectedData => &self.corrected_data,
    }
  }
}

/// Runs encoder, channel and decoder over one snapshot of the inputs.
pub fn run(inputs: &Snapshot) -> Result<Simulation> {
  inputs.input_word.expect_role(Role::Data)?;
  inputs.error_mask.expect_role(Role::ErrorMask)?;

  let hamming = Hamming74::new(inputs.convention);
  // the equations index d1 first
  let info = inputs.input_word.reversed();

  let encoded = hamming.encode(&info, &inputs.error_mask)?;
  debug!(
    data = %inputs.input_word.bitdump(),
    parity = %encoded.parity.bitdump(),
    codeword = %encoded.codeword.bitdump(),
    convention = %inputs.convention,
    "encoded"
  );
  debug!(
    mask = %inputs.error_mask.bitdump(),
    received = %encoded.errored.bitdump(),
    "transmitted"
  );

  let decoded = hamming.decode(&encoded.errored)?;
  debug!(
    recomputed = %decoded.recomputed_parity.bitdump(),
    received = %decoded.received_parity.bitdump(),
    syndrome = %decoded.syndrome.bitdump(),
    position = decoded.position,
    corrected = %decoded.corrected.bitdump(),
    "decoded"
  );

  Ok(Simulation {
    inputs: inputs.clone(),
    data: inputs.input_word.clone(),
    parity: encoded.parity,
    codeword: encoded.codeword,
    received_codeword: encoded.errored,
    received_data: decoded.received_info.reversed(),
    received_parity: decoded.received_parity,
    recomputed_parity: decoded.recomputed_parity,
    syndrome: decoded.syndrome,
    error_position: decoded.position,
    corrected_codeword: decoded.corrected,
    corrected_data: decoded.info.reversed(),
  })
}

/// Takes a snapshot from `source`, runs it, and republishes every named group
/// on `board`. On error nothing is published.
pub fn simulate<S>(source: &S, board: &mut BitBoard) -> Result<Simulation>
where
  S: InputSource + ?Sized,
{
  let snapshot = source.snapshot();
  let simulation = run(&snapshot)?;
  board.publish(simulation.groups());
  Ok(simulation)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::inputs::Inputs;
  use libhamming::{CodecError, ParityConvention};

  fn snapshot(data: &str, mask: &str, convention: ParityConvention) -> Snapshot {
    Snapshot {
      input_word: data.parse().unwrap(),
      error_mask: mask.parse().unwrap(),
      convention,
    }
  }

  #[test]
  fn run_publishes_every_stage() {
    let sim = run(&snapshot("0101", "0000100", ParityConvention::Even)).unwrap();
    assert_eq!("0101", sim.data.bitdump());
    assert_eq!("101", sim.parity.bitdump());
    assert_eq!("1011010", sim.codeword.bitdump());
    assert_eq!("1011110", sim.received_codeword.bitdump());
    assert_eq!("101", sim.syndrome.bitdump());
    assert_eq!(5, sim.error_position);
    assert_eq!("1011010", sim.corrected_codeword.bitdump());
    assert_eq!("0101", sim.corrected_data.bitdump());
    assert!(sim.recovered());
  }

  #[test]
  fn run_keeps_the_decoder_view() {
    // d2 flipped: the received word reads 0111 before correction
    let sim = run(&snapshot("0101", "0000100", ParityConvention::Even)).unwrap();
    assert_eq!("0111", sim.received_data.bitdump());
    assert_eq!("101", sim.received_parity.bitdump());
    assert_eq!("000", sim.recomputed_parity.bitdump());
    assert_eq!(
      sim.syndrome,
      sim.recomputed_parity.xor(&sim.received_parity).unwrap()
    );

    // a flipped check bit leaves the data alone
    let sim = run(&snapshot("0101", "0100000", ParityConvention::Even)).unwrap();
    assert_eq!(sim.data, sim.received_data);
    assert_eq!("111", sim.received_parity.bitdump());
    assert_eq!(sim.parity, sim.recomputed_parity);
    assert_eq!(2, sim.error_position);
  }

  #[test]
  fn run_is_reproducible() {
    let snap = snapshot("1100", "0010000", ParityConvention::Odd);
    assert_eq!(run(&snap).unwrap(), run(&snap).unwrap());
  }

  #[test]
  fn failed_run_publishes_nothing() {
    let mut board = BitBoard::new();
    simulate(&Inputs::default(), &mut board).unwrap();
    let before = board.render();

    let bad = Snapshot {
      input_word: BitVector::zeros(5),
      error_mask: BitVector::zeros(7),
      convention: ParityConvention::Even,
    };
    assert!(matches!(
      simulate(&bad, &mut board),
      Err(CodecError::InvalidLength { expected: 4, actual: 5, .. })
    ));
    assert_eq!(before, board.render());
  }

  #[test]
  fn simulate_fills_the_board() {
    let mut board = BitBoard::new();
    let mut inputs = Inputs::default();
    inputs.toggle_data_bit(3).unwrap();
    let sim = simulate(&inputs, &mut board).unwrap();
    for group in Group::ALL {
      assert_eq!(Some(sim.group(group)), board.get(group));
    }
    assert_eq!("0100", board.get(Group::CorrectedData).unwrap().bitdump());
  }
}
