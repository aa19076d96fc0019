use hamming_sim::{config::*, *};
use std::io::{self, BufRead, Write};

fn proc(config: &Config, reader: &mut dyn BufRead, writer: &mut dyn Write) -> anyhow::Result<()> {
  let mut shell = Shell::new(config.inputs()?);
  if config.interactive {
    write!(writer, "{}", HELP)?;
    shell.run(reader, writer)
  } else {
    shell.refresh()?;
    write_report(writer, shell.board(), shell.last())
  }
}

fn main() -> anyhow::Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let config = Config::from_args(&args)?;
  if config.help {
    print!("{}", USAGE);
    return Ok(());
  }

  tracing_subscriber::fmt()
    .with_max_level(config.log_level)
    .with_writer(io::stderr)
    .init();

  let r = io::stdin();
  let mut reader = r.lock();

  let w = io::stdout();
  let mut writer = w.lock();

  proc(&config, &mut reader, &mut writer)
}
