//! rune-wrap: wrap text to a fixed column width.
//!
//! Reads a file (or stdin), wraps it with `rune-text` and prints one output
//! line per wrapped line.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rune_config::RuneConfig;

#[derive(Parser)]
#[command(name = "rune-wrap")]
#[command(about = "Wrap text to a fixed column width", long_about = None)]
#[command(version)]
struct Cli {
    /// Column budget (overrides rune.toml and RUNE_WRAP_WIDTH)
    #[arg(short, long)]
    width: Option<usize>,

    /// Configuration file (defaults to ./rune.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the display width of each input line instead of wrapping
    #[arg(long)]
    measure: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RuneConfig::load(cli.config.as_deref())?;
    if let Some(width) = cli.width {
        config.wrap.width = width;
    }

    env_logger::Builder::new()
        .parse_filters(&config.log.filter)
        .init();
    log::debug!("effective configuration: {config:?}");

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let bytes = read_input(cli.file.as_ref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.measure {
        for line in String::from_utf8_lossy(&bytes).lines() {
            writeln!(out, "{}", rune_text::string_width(line))?;
        }
    } else {
        for line in rune_text::word_wrap_bytes(&bytes, config.wrap.width) {
            let line = if config.wrap.trim_trailing {
                line.trim_ascii_end()
            } else {
                line
            };
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    if let Some(path) = file {
        return std::fs::read(path).with_context(|| format!("failed to read {}", path.display()));
    }
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    Ok(bytes)
}
