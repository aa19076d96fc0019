//! Command-line configuration.
//!
//! Every option has a default, so running with no arguments simulates an
//! all-zero word over a clean channel with even parity.

use crate::{error::*, inputs::Inputs};
use libhamming::{types::Role, BitVector, ParityConvention};
use tracing::Level;

pub const USAGE: &str = "\
usage: hamming-sim [options]

  --data <bits>       data word d4 d3 d2 d1, e.g. 0101 (default 0000)
  --error <bits>      error mask over positions 1..7, e.g. 0000100
  --error-at <pos>    flip codeword position <pos> (1..7), may repeat
  --even | --odd      parity convention (default even)
  -i, --interactive   read commands from stdin
  --log-level <lvl>   error, warn, info, debug or trace (default warn)
  -h, --help          print this message
";

#[derive(Debug, Clone)]
pub struct Config {
  /// Data word in natural order.
  pub data: BitVector,
  pub error_mask: BitVector,
  pub convention: ParityConvention,
  pub interactive: bool,
  pub log_level: Level,
  pub help: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      data: BitVector::zeros(Role::Data.len()),
      error_mask: BitVector::zeros(Role::ErrorMask.len()),
      convention: ParityConvention::Even,
      interactive: false,
      log_level: Level::WARN,
      help: false,
    }
  }
}

impl Config {
  /// Parses arguments, program name excluded.
  pub fn from_args(args: &[String]) -> Result<Self> {
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
      match args[i].as_str() {
        "--data" => {
          let data: BitVector = value_of(args, &mut i)?
            .parse()
            .context("--data takes a word of 0s and 1s")?;
          data.expect_role(Role::Data)?;
          config.data = data;
        }
        "--error" => {
          let mask: BitVector = value_of(args, &mut i)?
            .parse()
            .context("--error takes a mask of 0s and 1s")?;
          mask.expect_role(Role::ErrorMask)?;
          config.error_mask = mask;
        }
        "--error-at" => {
          let pos: usize = value_of(args, &mut i)?
            .parse()
            .context("--error-at takes a position")?;
          config.error_mask.toggle_position(pos)?;
        }
        "--even" => config.convention = ParityConvention::Even,
        "--odd" => config.convention = ParityConvention::Odd,
        "-i" | "--interactive" => config.interactive = true,
        "--log-level" => {
          config.log_level = value_of(args, &mut i)?
            .parse()
            .map_err(|_| anyhow!("--log-level takes error, warn, info, debug or trace"))?;
        }
        "-h" | "--help" => config.help = true,
        other => bail!("unknown argument {:?}\n\n{}", other, USAGE),
      }
      i += 1;
    }

    Ok(config)
  }

  pub fn inputs(&self) -> Result<Inputs> {
    Inputs::new(self.data.clone(), self.error_mask.clone(), self.convention)
  }
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
  let flag = &args[*i];
  *i += 1;
  args
    .get(*i)
    .map(String::as_str)
    .ok_or_else(|| anyhow!("{} requires a value", flag))
}
