//! MIPS disassembler CLI.
//!
//! This binary decodes raw instruction words and prints one line per word:
//! 1. **Words:** Hex words from the command line, or whitespace-separated from stdin.
//! 2. **Configuration:** Built-in defaults, an optional JSON file, then flag overrides.
//! 3. **Output:** `ADDR  WORD  TEXT`, with the address advancing by one word per line.

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mipsdis_core::common::constants::INSTRUCTION_SIZE;
use mipsdis_core::config::Config;
use mipsdis_core::isa::abi::Abi;
use mipsdis_core::utils::swap_endianness;
use mipsdis_core::{InstrCategory, Instruction};

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "Table-driven MIPS disassembler",
    long_about = "Decode and disassemble 32-bit MIPS instruction words.\n\nWords are hexadecimal, with or without a 0x prefix. With no words on the command line they are read from stdin.\n\nExamples:\n  mipsdis 27BDFFE8 AFBF0014\n  mipsdis --vram 0x80000400 --category rsp 4A031050\n  xxd -p -c4 code.bin | mipsdis --vram 0x80000400"
)]
struct Cli {
    /// Address of the first word.
    #[arg(long, value_parser = parse_word, default_value = "0")]
    vram: u32,

    /// Instruction category: cpu, rsp or r3000gte.
    #[arg(short, long)]
    category: Option<InstrCategory>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GPR naming convention: numeric, o32, n32 or n64.
    #[arg(long)]
    abi: Option<Abi>,

    /// Print every register by number.
    #[arg(long)]
    numeric: bool,

    /// Print raw instructions instead of pseudo-instructions.
    #[arg(long)]
    no_pseudos: bool,

    /// Byte-swap each word before decoding (little-endian input).
    #[arg(long)]
    swap: bool,

    /// Print the active configuration before disassembling.
    #[arg(long)]
    info: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Instruction words in hex.
    #[arg(value_parser = parse_word)]
    words: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let category = cli.category.unwrap_or(config.misc.default_category);
    config
        .install()
        .context("failed to install the configuration")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.info {
        writeln!(out, "{}", Config::info())?;
    }

    let words = if cli.words.is_empty() && !cli.info {
        read_stdin_words()?
    } else {
        cli.words
    };
    info!(count = words.len(), %category, "disassembling");

    let mut vram = cli.vram;
    for word in words {
        let word = if cli.swap { swap_endianness(word) } else { word };
        let instr = Instruction::new(word, vram, category);
        writeln!(out, "{vram:08X}  {word:08X}  {}", instr.disassemble(None, None))?;
        vram = vram.wrapping_add(INSTRUCTION_SIZE);
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Defaults, then the JSON file, then flags.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Config::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(abi) = cli.abi {
        config.reg_names.gpr_abi = abi;
    }
    if cli.numeric {
        config.reg_names.named_registers = false;
        config.reg_names.gpr_abi = Abi::Numeric;
        config.reg_names.fpr_abi = Abi::Numeric;
    }
    if cli.no_pseudos {
        config.pseudos.enable_pseudos = false;
    }
    if let Some(category) = cli.category {
        config.misc.default_category = category;
    }
    debug!(?config, "effective configuration");
    Ok(config)
}

fn read_stdin_words() -> Result<Vec<u32>> {
    let mut words = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        for token in line.split_whitespace() {
            words.push(parse_word(token).map_err(anyhow::Error::msg)?);
        }
    }
    Ok(words)
}

/// Parses a hex word, accepting an optional `0x` prefix and `_` separators.
fn parse_word(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
        .replace('_', "");
    u32::from_str_radix(&digits, 16).map_err(|e| format!("`{s}` is not a 32-bit hex word: {e}"))
}
