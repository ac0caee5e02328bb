//! Round-trip diagnostic: compress a file, decompress it back, and verify
//! the result byte-for-byte.
//!
//! Usage:
//!   cargo run --bin diag_roundtrip -- <file> [--reuse] [--pos-bits N] [--len-bits N]

use std::fs;
use std::process;

use anyhow::{bail, Context, Result};

use lzss_rs::{LzssCompressor, LzssSettings};

fn main() {
    if let Err(err) = run() {
        eprintln!("diag_roundtrip: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut path: Option<String> = None;
    let mut settings = LzssSettings::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--reuse" => settings.reuse_compressed = true,
            "--pos-bits" => {
                let value = iter.next().context("--pos-bits needs a value")?;
                settings.position_bits = value.parse().context("--pos-bits must be a number")?;
            }
            "--len-bits" => {
                let value = iter.next().context("--len-bits needs a value")?;
                settings.length_bits = value.parse().context("--len-bits must be a number")?;
            }
            "--initial-pos" => {
                let value = iter.next().context("--initial-pos needs a value")?;
                settings.initial_dictionary_pos =
                    value.parse().context("--initial-pos must be a number")?;
            }
            other if path.is_none() => path = Some(other.to_string()),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let Some(path) = path else {
        bail!("usage: diag_roundtrip <file> [--reuse] [--pos-bits N] [--len-bits N] [--initial-pos N]");
    };

    settings.validate().context("settings")?;

    let input = fs::read(&path).with_context(|| format!("reading {path}"))?;
    let codec = LzssCompressor::new(settings);

    let compressed = codec.encode(&input);
    let restored = codec.decode(&compressed);

    println!("input:      {} bytes", input.len());
    println!("compressed: {} bytes", compressed.len());
    if !input.is_empty() {
        println!(
            "ratio:      {:.1}%",
            compressed.len() as f64 / input.len() as f64 * 100.0
        );
    }

    if restored != input {
        let diverged = input
            .iter()
            .zip(restored.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| input.len().min(restored.len()));
        bail!(
            "round-trip FAILED: {} bytes back, first divergence at offset {}",
            restored.len(),
            diverged
        );
    }

    println!("round-trip OK");
    Ok(())
}
