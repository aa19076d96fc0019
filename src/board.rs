use crate::error::*;
use hashlink::LinkedHashMap;
use libhamming::{types::Role, BitDump, BitVector, Hamming74};
use std::{fmt, str::FromStr};

/// Named bit groups published by every simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
  Data,
  Parity,
  Codeword,
  ReceivedCodeword,
  Syndrome,
  CorrectedData,
}

impl Group {
  /// Publication order.
  pub const ALL: [Group; 6] = [
    Group::Data,
    Group::Parity,
    Group::Codeword,
    Group::ReceivedCodeword,
    Group::Syndrome,
    Group::CorrectedData,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Group::Data => "data",
      Group::Parity => "parity",
      Group::Codeword => "codeword",
      Group::ReceivedCodeword => "received_codeword",
      Group::Syndrome => "syndrome",
      Group::CorrectedData => "corrected_data",
    }
  }

  pub fn role(&self) -> Role {
    match self {
      Group::Data | Group::CorrectedData => Role::Data,
      Group::Parity => Role::Parity,
      Group::Codeword | Group::ReceivedCodeword => Role::Codeword,
      Group::Syndrome => Role::Syndrome,
    }
  }

  /// Labels of the bits in the order the group is published.
  pub fn labels(&self) -> Vec<&'static str> {
    match self {
      Group::Data | Group::CorrectedData => vec!["d4", "d3", "d2", "d1"],
      Group::Parity | Group::Syndrome => vec!["c1", "c2", "c4"],
      Group::Codeword | Group::ReceivedCodeword => {
        (1..=7).filter_map(Hamming74::label_of).collect()
      }
    }
  }
}

impl fmt::Display for Group {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Group {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    Group::ALL
      .iter()
      .find(|g| g.name() == s)
      .copied()
      .ok_or_else(|| anyhow!("unknown bit group {:?}", s))
  }
}

/// Read-only view of the latest run for a front end to display.
#[derive(Debug, Clone, Default)]
pub struct BitBoard {
  groups: LinkedHashMap<Group, BitVector>,
}

impl BitBoard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, group: Group) -> Option<&BitVector> {
    self.groups.get(&group)
  }

  pub fn get_by_name(&self, name: &str) -> Option<&BitVector> {
    name.parse().ok().and_then(|group| self.get(group))
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Group, &BitVector)> {
    self.groups.iter()
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  /// Replaces the whole publication in one step.
  pub(crate) fn publish(&mut self, groups: LinkedHashMap<Group, BitVector>) {
    self.groups = groups;
  }

  pub fn render(&self) -> String {
    self
      .groups
      .iter()
      .map(|(group, bits)| {
        format!(
          "{:<18} {:<8} [{}]\n",
          group.name(),
          bits.bitdump(),
          group.labels().join(" ")
        )
      })
      .collect()
  }
}

impl fmt::Display for BitBoard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render())
  }
}
