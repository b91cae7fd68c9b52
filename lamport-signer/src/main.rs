use lamport_ots::hash::{Blake3, OneWayHash, Sha256};
use lamport_ots::lamport::keypair;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Signs a message with a fresh Lamport key pair, verifies the signature
/// and prints whether it is valid.
#[derive(Parser, Debug)]
#[command(version)]
struct Arguments {
    /// Message to sign. Prompted for on stdin when absent.
    #[arg(long)]
    message: Option<String>,
    /// Hash function the key pair is built over.
    #[arg(long, value_enum, default_value_t = HashChoice::Sha256)]
    hash: HashChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashChoice {
    Sha256,
    Blake3,
}

pub fn read_message() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter message: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
}

fn sign_and_verify<H: OneWayHash>(message: &str) -> Result<bool> {
    let (private_key, public_key) =
        keypair::<H>().context("generating lamport key pair")?;
    let signature = private_key.sign(message);
    Ok(public_key.verify(message, &signature))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Arguments::parse();
    let message = match args.message {
        Some(message) => message,
        None => read_message().context("reading message from stdin")?,
    };
    info!(bytes = message.len(), hash = ?args.hash, "signing message");

    let valid = match args.hash {
        HashChoice::Sha256 => sign_and_verify::<Sha256>(&message)?,
        HashChoice::Blake3 => sign_and_verify::<Blake3>(&message)?,
    };
    println!("{}", valid);
    Ok(())
}
