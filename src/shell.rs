//! Line-oriented front end: stands in for the clickable demo, toggling input
//! and error bits and reprinting the board after every change.

use crate::{
  board::BitBoard,
  error::*,
  inputs::{InputSource, Inputs},
  pipeline::{simulate, Simulation},
};
use libhamming::{types::ErrorPosition, BitDump, Hamming74, ParityConvention};
use std::{
  io::{BufRead, Write},
  str::FromStr,
};
use tracing::{debug, warn};

pub const HELP: &str = "\
commands:
  d1..d4            toggle a data bit
  e1..e7            toggle the error bit over a codeword position
  e:<label>         same, by label (e:c1, e:d3, ...)
  parity [even|odd] set or flip the parity convention
  reset             clear data and error bits
  show              print the current board
  help              print this message
  quit              leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  ToggleData(usize),
  ToggleError(ErrorPosition),
  Parity(Option<ParityConvention>),
  Reset,
  Show,
  Help,
  Quit,
}

impl FromStr for Command {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let mut words = s.split_whitespace();
    let head = words.next().unwrap_or_default();
    let arg = words.next();
    ensure!(words.next().is_none(), "too many arguments in {:?}", s);

    let command = match (head, arg) {
      ("parity", None) => Command::Parity(None),
      ("parity", Some("even")) => Command::Parity(Some(ParityConvention::Even)),
      ("parity", Some("odd")) => Command::Parity(Some(ParityConvention::Odd)),
      ("reset", None) => Command::Reset,
      ("show", None) | ("", None) => Command::Show,
      ("help", None) | ("?", None) => Command::Help,
      ("quit", None) | ("exit", None) => Command::Quit,
      (word, None) => {
        if let Some(label) = word.strip_prefix("e:") {
          let pos = Hamming74::position_of(label)
            .ok_or_else(|| anyhow!("no codeword bit labelled {:?}", label))?;
          Command::ToggleError(pos)
        } else if let Some(n) = word.strip_prefix('d') {
          Command::ToggleData(n.parse().with_context(|| format!("bad data bit {:?}", word))?)
        } else if let Some(n) = word.strip_prefix('e') {
          Command::ToggleError(n.parse().with_context(|| format!("bad error bit {:?}", word))?)
        } else {
          bail!("unknown command {:?}", word)
        }
      }
      _ => bail!("unknown command {:?}", s.trim()),
    };
    Ok(command)
  }
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
  inputs: Inputs,
  board: BitBoard,
  last: Option<Simulation>,
}

impl Shell {
  pub fn new(inputs: Inputs) -> Self {
    Shell {
      inputs,
      ..Default::default()
    }
  }

  pub fn inputs(&self) -> &Inputs {
    &self.inputs
  }

  pub fn board(&self) -> &BitBoard {
    &self.board
  }

  pub fn last(&self) -> Option<&Simulation> {
    self.last.as_ref()
  }

  /// Re-runs the pipeline over the current inputs.
  pub fn refresh(&mut self) -> Result<&Simulation> {
    let simulation = simulate(&self.inputs, &mut self.board)?;
    Ok(self.last.insert(simulation))
  }

  /// Applies one command. Returns `false` once the shell should stop.
  pub fn execute(&mut self, command: Command) -> Result<bool> {
    debug!(?command, "executing");
    match command {
      Command::ToggleData(label) => self.inputs.toggle_data_bit(label)?,
      Command::ToggleError(pos) => self.inputs.toggle_error_bit(pos)?,
      Command::Parity(convention) => {
        let next = convention.unwrap_or_else(|| self.inputs.get_parity_convention().toggled());
        self.inputs.set_convention(next);
      }
      Command::Reset => self.inputs.reset(),
      Command::Show | Command::Help => return Ok(true),
      Command::Quit => return Ok(false),
    }
    self.refresh()?;
    Ok(true)
  }

  pub fn run(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<()> {
    self.refresh()?;
    write_report(writer, &self.board, self.last.as_ref())?;

    let mut line = String::new();
    loop {
      write!(writer, "> ")?;
      writer.flush()?;
      line.clear();
      if reader.read_line(&mut line)? == 0 {
        break;
      }

      let command = match line.parse::<Command>() {
        Ok(c) => c,
        Err(e) => {
          warn!("rejected input: {:#}", e);
          writeln!(writer, "error: {:#}", e)?;
          continue;
        }
      };
      match self.execute(command) {
        Ok(false) => break,
        Ok(true) if command == Command::Help => write!(writer, "{}", HELP)?,
        Ok(true) => write_report(writer, &self.board, self.last.as_ref())?,
        Err(e) => {
          warn!("command failed: {:#}", e);
          writeln!(writer, "error: {:#}", e)?;
        }
      }
    }
    Ok(())
  }
}

/// Prints the board, what the decoder saw, and a one-line verdict.
pub fn write_report(
  writer: &mut dyn Write,
  board: &BitBoard,
  simulation: Option<&Simulation>,
) -> Result<()> {
  write!(writer, "{}", board)?;
  if let Some(sim) = simulation {
    writeln!(
      writer,
      "decoder: received data {}, check bits {} vs recomputed {}",
      sim.received_data.bitdump(),
      sim.received_parity.bitdump(),
      sim.recomputed_parity.bitdump()
    )?;
    let verdict = match sim.error_position {
      0 => "no error detected".to_owned(),
      pos => format!(
        "error located at position {} ({}), corrected",
        pos,
        Hamming74::label_of(pos).unwrap_or("?")
      ),
    };
    writeln!(
      writer,
      "{} parity, mask {}: {}; data {}",
      sim.inputs.convention,
      sim.inputs.error_mask.bitdump(),
      verdict,
      if sim.recovered() { "recovered" } else { "NOT recovered" }
    )?;
  }
  Ok(())
}
