//! Webhook Signature Command Line Tool
//!
//! Provides commands for working with webhook event payloads:
//! - validate: Validate webhook envelope JSON files
//! - canonicalize: Output the canonical signature text
//! - sign: Compute the HMAC-SHA256 signature of a payload
//! - verify: Verify a received signature against a payload

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hooksig_canonical::{
    compute_signature, normalize_signature, signature_text_value, verify_signature, SigningSecret,
};
use hooksig_core::{validate_envelope, WebhookEnvelope};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hooksig")]
#[command(version)]
#[command(about = "Webhook Signature Tool - Validate, canonicalize, and sign webhook payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a webhook envelope JSON file
    #[command(about = "Validate a webhook envelope JSON file")]
    Validate {
        /// Path to the JSON file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Output the canonical signature text of a payload
    #[command(about = "Output the canonical signature text")]
    Canonicalize {
        /// Path to the JSON file to canonicalize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute the payload signature
    #[command(about = "Compute the HMAC-SHA256 signature of a payload")]
    Sign {
        /// Path to the JSON file to sign
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Shared signing secret
        #[arg(long, short)]
        secret: String,
    },

    /// Verify a received signature
    #[command(about = "Verify a received signature against a payload")]
    Verify {
        /// Path to the JSON file to verify
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Shared signing secret
        #[arg(long, short)]
        secret: String,

        /// The received signature (64 hex characters)
        #[arg(long)]
        signature: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => handle_validate(&file),
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Sign { file, secret } => handle_sign(&file, &secret),
        Commands::Verify {
            file,
            secret,
            signature,
        } => handle_verify(&file, &secret, &signature),
    }
}

fn read_payload(file: &PathBuf) -> Result<serde_json::Value> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json).with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn handle_validate(file: &PathBuf) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let envelope: WebhookEnvelope = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as webhook envelope", file.display()))?;
    validate_envelope(&envelope).with_context(|| "Envelope validation failed")?;

    println!("Valid webhook envelope");

    Ok(())
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let payload = read_payload(file)?;

    let text = signature_text_value(&payload)
        .with_context(|| "Failed to build canonical signature text")?;

    println!("{}", text);

    Ok(())
}

fn handle_sign(file: &PathBuf, secret: &str) -> Result<()> {
    let payload = read_payload(file)?;

    let secret = SigningSecret::from_string(secret);
    let signature =
        compute_signature(&payload, &secret).with_context(|| "Failed to compute signature")?;

    println!("{}", signature);

    Ok(())
}

fn handle_verify(file: &PathBuf, secret: &str, signature: &str) -> Result<()> {
    let payload = read_payload(file)?;

    let Some(signature) = normalize_signature(signature) else {
        bail!("Malformed signature: expected 64 hex characters");
    };

    let secret = SigningSecret::from_string(secret);
    if !verify_signature(&payload, &secret, &signature) {
        bail!("Signature mismatch");
    }

    println!("Signature verified");

    Ok(())
}
