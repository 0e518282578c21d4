//! Logger setup for the binary.
//!
//! Normal output goes through `log::info!` and is printed bare; warnings and
//! errors get a level prefix. `--verbose` adds debug records with
//! timestamps. `--logfile` copies everything to a file with ANSI escapes
//! stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Writes to stdout and, optionally, an ANSI-stripped file.
struct Tee {
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = logfile
        .map(|path| File::create(path).map(strip_ansi_escapes::Writer::new))
        .transpose()?;

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("pokedex", level)
        .filter_module("pokedex_lib", level)
        .filter_module("pokedex_client", level)
        .target(Target::Pipe(Box::new(Tee { file })))
        .format(move |buf, record| {
            if verbose {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Warn | Level::Error => {
                    writeln!(buf, "{}: {}", record.level(), record.args())
                }
                _ => writeln!(buf, "[{}] {}", record.target(), record.args()),
            }
        });
    builder.try_init().map_err(io::Error::other)
}
