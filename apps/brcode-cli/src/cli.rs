//! Command-line arguments and the commands behind them.

use std::path::PathBuf;

use brcode_core::payload::{parse, tags};
use brcode_core::tlv::TlvField;
use brcode_core::{assemble_with, Amount, PayloadRequest, PixKeyType};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::{BrCodeConfig, ConfigError, ConfigResult};

/// Generate and verify Pix BR Code payloads.
#[derive(Debug, Parser)]
#[command(name = "brcode", version, about)]
pub struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pix key.
    #[arg(long)]
    pub key: Option<String>,

    /// Key type: cpf, cnpj, email, phone, random.
    #[arg(long, value_parser = parse_key_type)]
    pub key_type: Option<PixKeyType>,

    /// Merchant name (normalized, max 25 characters).
    #[arg(long)]
    pub name: Option<String>,

    /// Merchant city (normalized, max 15 characters).
    #[arg(long)]
    pub city: Option<String>,

    /// Fixed amount in reais, e.g. 10.50. Omit for an open amount.
    #[arg(long, value_parser = parse_amount)]
    pub amount: Option<Amount>,

    /// Description shown to the payer (normalized, max 25 characters).
    #[arg(long)]
    pub description: Option<String>,

    /// Print JSON instead of the bare payload.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a payload's CRC16 and list its fields.
    Verify {
        /// Complete payload, including the trailing 6304XXXX.
        payload: String,
    },
}

fn parse_key_type(s: &str) -> Result<PixKeyType, String> {
    s.parse().map_err(|e: brcode_core::PayloadError| e.to_string())
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    s.parse().map_err(|e: brcode_core::PayloadError| e.to_string())
}

/// JSON output of a generated payload.
#[derive(Debug, Serialize)]
pub struct PayloadOutput {
    pub payload: String,
    pub checksum: String,
    pub length: usize,
}

impl Args {
    /// Merges flags over the loaded configuration into a request.
    pub fn build_request(&self, config: &BrCodeConfig) -> ConfigResult<PayloadRequest> {
        let merchant = &config.merchant;

        let key = self
            .key
            .clone()
            .or_else(|| merchant.key.clone())
            .ok_or_else(|| ConfigError::MissingRequired("merchant.key (--key)".into()))?;
        let key_type = self
            .key_type
            .or(merchant.key_type)
            .ok_or_else(|| ConfigError::MissingRequired("merchant.key_type (--key-type)".into()))?;
        let name = self
            .name
            .clone()
            .or_else(|| merchant.name.clone())
            .ok_or_else(|| ConfigError::MissingRequired("merchant.name (--name)".into()))?;

        Ok(PayloadRequest {
            key,
            key_type,
            merchant_name: name,
            merchant_city: self.city.clone().or_else(|| merchant.city.clone()),
            amount: self.amount,
            description: self.description.clone(),
        })
    }
}

/// Builds a payload and renders it for stdout.
pub fn generate(args: &Args, config: &BrCodeConfig) -> anyhow::Result<String> {
    let request = args.build_request(config)?;
    let payload = assemble_with(&request, &config.payload)?;
    info!(key_type = %request.key_type, length = payload.len(), "Payload generated");

    if args.json {
        let output = PayloadOutput {
            checksum: payload[payload.len() - 4..].to_string(),
            length: payload.len(),
            payload,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(payload)
    }
}

/// Verifies a payload and renders its field listing.
pub fn verify(payload: &str) -> anyhow::Result<String> {
    let fields = parse(payload.trim())?;
    let mut lines = vec!["CRC16 OK".to_string()];

    for field in &fields {
        lines.push(describe(field, 0));
        if field.tag == tags::MERCHANT_ACCOUNT_INFO || field.tag == tags::ADDITIONAL_DATA {
            for nested in field.nested()? {
                lines.push(describe(&nested, 1));
            }
        }
    }

    Ok(lines.join("\n"))
}

fn describe(field: &TlvField, depth: usize) -> String {
    format!(
        "{}{} {:02} {}",
        "  ".repeat(depth),
        field.tag,
        field.value.chars().count(),
        field.value
    )
}
