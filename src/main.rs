//! rvv-emu: instruction-word inspector for RISC-V vector encodings.

use anyhow::{bail, Context, Result};
use rvv_emu::bits::extract;
use rvv_emu::config::Config;
use rvv_emu::isa::{classify_vector, VectorClass};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let quiet = args.iter().any(|a| a == "--quiet" || a == "-q");
    let words: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .map(|s| s.as_str())
        .collect();

    if words.is_empty() {
        bail!("usage: rvv-emu [--quiet] <hex-word>...");
    }

    let config = Config::get();
    log::debug!("ISA variant: {}", config.isa_variant());

    for raw in words {
        let encoding = parse_word(raw)
            .with_context(|| format!("invalid instruction word '{}'", raw))?;
        report(encoding, quiet);
    }

    Ok(())
}

/// Parse a hex instruction word, with or without a 0x prefix.
fn parse_word(raw: &str) -> Result<u64> {
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    Ok(u64::from_str_radix(hex, 16)?)
}

fn report(encoding: u64, quiet: bool) {
    let class = match classify_vector(encoding) {
        Some(VectorClass::Load) => "vector load",
        Some(VectorClass::Store) => "vector store",
        Some(VectorClass::Arith) => "vector arith",
        None => "not vector",
    };

    if quiet {
        println!("0x{:08X}  {}", encoding, class);
    } else {
        println!(
            "0x{:08X}  opcode=0b{:07b} width=0b{:03b}  {}",
            encoding,
            extract(encoding, 0, 6),
            extract(encoding, 12, 14),
            class
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word("0x02056087").unwrap(), 0x0205_6087);
        assert_eq!(parse_word("02056087").unwrap(), 0x0205_6087);
        assert!(parse_word("not-hex").is_err());
    }
}
