use phf::phf_map;

pub const CODE_LEN: usize = 7; // n
pub const INFO_LEN: usize = 4; // k
pub const PARITY_LEN: usize = CODE_LEN - INFO_LEN; // m

/// Codeword slots (0-indexed) holding d1..d4.
pub const DATA_SLOTS: [usize; INFO_LEN] = [2, 4, 5, 6];
/// Codeword slots (0-indexed) holding c1, c2, c4.
pub const PARITY_SLOTS: [usize; PARITY_LEN] = [0, 1, 3];

/// Data bits (transmission order) covered by each check bit c1, c2, c4.
pub const PARITY_EQUATIONS: [[usize; 3]; PARITY_LEN] = [[0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Label of every codeword position, 1..=7.
pub const POSITION_LABELS: [&str; CODE_LEN] = ["c1", "c2", "d1", "c4", "d2", "d3", "d4"];

pub static LABEL_POSITIONS: phf::Map<&'static str, usize> = phf_map! {
  "c1" => 1,
  "c2" => 2,
  "d1" => 3,
  "c4" => 4,
  "d2" => 5,
  "d3" => 6,
  "d4" => 7,
};
