use crate::types::*;
use bitvec::prelude::*;

pub fn bitdump_bitslice<T, O>(bits: &BitSlice<T, O>) -> String
where
  T: BitStore,
  O: BitOrder,
{
  bits.iter().fold("".to_owned(), |s, b| {
    format!("{}{}", s, if *b { 1 } else { 0 })
  })
}

/// Value of the bits read most significant first.
pub fn msb_to_u32(bv: &BSRep) -> u32 {
  debug_assert!(bv.len() <= 32);
  bv.iter().rev().enumerate().fold(
    0u32,
    |acc, (idx, b)| if *b { acc + (1 << idx) } else { acc },
  )
}

/// Lowest `width` bits of `num`, most significant first.
pub fn u32_to_msb(num: u32, width: usize) -> BVRep {
  debug_assert!(width <= 32);
  (0..width)
    .rev()
    .map(|shift| (num >> shift) & 1 == 1)
    .collect()
}
