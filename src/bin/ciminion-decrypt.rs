//! Decrypts the ciphertext carried in a public-signal array.
//!
//! ```text
//! ciminion-decrypt public.json 4 2134 3423412331
//! ```
//!
//! Prints the recovered plaintext as `[m0,m1,...]` in decimal on stdout.

use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{anyhow, Context};
use ciminion::{presets, Ciminion, FieldElement, MasterKey, PublicSignals};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Field {
    /// GF(p) over the BN254 scalar prime.
    Bn254,
    /// GF(2^64).
    #[value(name = "gf2-64")]
    Gf2_64,
}

/// Decrypt and authenticate a Ciminion ciphertext stored as public signals.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON array of decimal strings.
    signals: PathBuf,
    /// Number of ciphertext elements in the array.
    ciphertext_len: usize,
    /// First half of the master key, in decimal.
    mk0: String,
    /// Second half of the master key, in decimal.
    mk1: String,
    /// Field the ciphertext lives in.
    #[arg(long, value_enum, default_value_t = Field::Bn254)]
    field: Field,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rendered = match args.field {
        Field::Bn254 => run(presets::bn254()?, &args)?,
        Field::Gf2_64 => run(presets::gf2_64()?, &args)?,
    };
    println!("{rendered}");
    Ok(())
}

fn run<F: FieldElement>(preset: &Ciminion<F>, args: &Args) -> anyhow::Result<String> {
    let key = MasterKey::new(parse_key(&args.mk0, "mk0")?, parse_key(&args.mk1, "mk1")?);

    let file = File::open(&args.signals)
        .with_context(|| format!("unable to open {}", args.signals.display()))?;
    let signals = PublicSignals::<F>::from_reader(BufReader::new(file), args.ciphertext_len)
        .with_context(|| format!("reading {}", args.signals.display()))?;

    tracing::info!(
        len = args.ciphertext_len,
        field = ?args.field,
        "decrypting public signals"
    );

    let engine = preset.clone().with_iv(signals.iv);
    let message = engine.decrypt_with_length(
        &key,
        signals.nonce,
        &signals.ciphertext,
        args.ciphertext_len,
        signals.tag,
    )?;

    let parts: Vec<String> = message.iter().map(FieldElement::to_decimal).collect();
    Ok(format!("[{}]", parts.join(",")))
}

fn parse_key<F: FieldElement>(value: &str, name: &str) -> anyhow::Result<F> {
    F::from_decimal(value)
        .ok_or_else(|| anyhow!("{name} is not a canonical field element: {value:?}"))
}
