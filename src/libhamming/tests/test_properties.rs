use anyhow::Result;
use libhamming::{types::*, *};
use rand::Rng;

const N_RANDOM: usize = 1000;

fn all_data_words() -> impl Iterator<Item = BitVector> {
  (0u32..16).map(|x| BitVector::from_value(x, 4).unwrap())
}

fn conventions() -> [ParityConvention; 2] {
  [ParityConvention::Even, ParityConvention::Odd]
}

#[test]
fn round_trip_without_error() -> Result<()> {
  for convention in conventions() {
    for data in all_data_words() {
      let parity = compute_parity(&data, convention)?;
      let cw = assemble(&data, &parity)?;
      assert_eq!((data.clone(), parity.clone()), disassemble(&cw)?);

      let syndrome = compute_syndrome(&cw, convention)?;
      assert!(syndrome.is_zero(), "{} -> {}", data, syndrome);
      assert_eq!(0, locate_error(&syndrome)?);
      assert_eq!(cw, correct(&cw, 0)?);
    }
  }
  Ok(())
}

#[test]
fn every_single_bit_error_is_corrected() -> Result<()> {
  for convention in conventions() {
    for data in all_data_words() {
      let cw = assemble(&data, &compute_parity(&data, convention)?)?;
      for pos in 1..=7 {
        let received = apply_error(&cw, &BitVector::single(7, pos)?)?;
        let syndrome = compute_syndrome(&received, convention)?;
        let located = locate_error(&syndrome)?;
        assert_eq!(pos, located, "data {} position {}", data, pos);
        assert_eq!(cw, correct(&received, located)?);
      }
    }
  }
  Ok(())
}

#[test]
fn convention_does_not_move_the_error() -> Result<()> {
  for data in all_data_words() {
    let even = compute_parity(&data, ParityConvention::Even)?;
    let odd = compute_parity(&data, ParityConvention::Odd)?;
    assert!(even.iter().zip(odd.iter()).all(|(e, o)| e != o));

    for pos in 1..=7 {
      let mask = BitVector::single(7, pos)?;
      let located: Vec<ErrorPosition> = conventions()
        .iter()
        .map(|c| -> Result<ErrorPosition> {
          let hamming = Hamming74::new(*c);
          let encoded = hamming.encode(&data, &mask)?;
          Ok(hamming.decode(&encoded.errored)?.position)
        })
        .collect::<Result<_>>()?;
      assert_eq!(vec![pos, pos], located);
    }
  }
  Ok(())
}

#[test]
fn worked_example_position_five() -> Result<()> {
  // d4 d3 d2 d1 as displayed
  let natural = BitVector::from_digits(&[0, 1, 0, 1])?;
  let data = natural.reversed();
  let parity = compute_parity(&data, ParityConvention::Even)?;
  assert_eq!("101", parity.bitdump());
  let codeword = assemble(&data, &parity)?;
  assert_eq!("1011010", codeword.bitdump());

  let received = apply_error(&codeword, &BitVector::single(7, 5)?)?;
  let syndrome = compute_syndrome(&received, ParityConvention::Even)?;
  assert_eq!(5, locate_error(&syndrome)?);

  let corrected = correct(&received, 5)?;
  assert_eq!(codeword, corrected);
  let (recovered, _) = disassemble(&corrected)?;
  assert_eq!(natural, recovered.reversed());
  Ok(())
}

#[test]
fn double_errors_still_yield_a_wellformed_result() -> Result<()> {
  let hamming = Hamming74::default();
  for data in all_data_words() {
    for first in 1..=7 {
      for second in (first + 1)..=7 {
        let mut mask = BitVector::single(7, first)?;
        mask.toggle_position(second)?;
        let encoded = hamming.encode(&data, &mask)?;
        let decoded = hamming.decode(&encoded.errored)?;
        // a double error is always detected, but never reliably repaired
        assert!(decoded.position <= 7);
        assert_ne!(0, decoded.position);
        assert_eq!(7, decoded.corrected.len());
        assert_eq!(4, decoded.info.len());
      }
    }
  }
  Ok(())
}

#[test]
fn random_words_and_single_errors() -> Result<()> {
  let mut rng = rand::thread_rng();
  for _ in 0..N_RANDOM {
    let convention = ParityConvention::from_even_flag(rng.gen());
    let hamming = Hamming74::new(convention);
    let digits: Vec<u8> = (0..4).map(|_| rng.gen_range(0..=1)).collect();
    let data = BitVector::from_digits(&digits)?;
    let pos = rng.gen_range(0..=7);
    let mask = if pos == 0 {
      BitVector::zeros(7)
    } else {
      BitVector::single(7, pos)?
    };

    let encoded = hamming.encode(&data, &mask)?;
    let decoded = hamming.decode(&encoded.errored)?;
    assert_eq!(pos, decoded.position);
    assert_eq!(encoded.codeword, decoded.corrected);
    assert_eq!(data, decoded.info);
  }
  Ok(())
}

#[test]
fn malformed_input_is_rejected_up_front() {
  assert!(matches!(
    BitVector::from_digits(&[0, 1, 3, 0]),
    Err(CodecError::InvalidBitValue { index: 2, .. })
  ));
  assert!(matches!(
    compute_parity(&BitVector::zeros(5), ParityConvention::Even),
    Err(CodecError::InvalidLength {
      expected: 4,
      actual: 5,
      ..
    })
  ));
  assert!(matches!(
    apply_error(&BitVector::zeros(7), &BitVector::zeros(6)),
    Err(CodecError::InvalidLength { .. })
  ));
  assert!(matches!(
    locate_error(&BitVector::zeros(2)),
    Err(CodecError::InvalidLength { .. })
  ));
}
