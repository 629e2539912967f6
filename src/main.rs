//! Validates a form payload stored in a JSON file.
//!
//! `marketplace-forms <form-kind> <path>` runs non-interactively; without
//! arguments the form kind and path are asked for.

use anyhow::{Context, Result};
use dotenv::dotenv;
use inquire::{Select, Text};
use log::info;
use marketplace_forms::payload::{parse_form_kind, validate_payload_file, FormKind};
use marketplace_forms::StandardRules;
use std::path::PathBuf;
use std::process::ExitCode;
use strum::IntoEnumIterator;

fn prompt() -> Result<(FormKind, PathBuf)> {
    let kind =
        Select::new("Which form do you want to validate?", FormKind::iter().collect()).prompt()?;
    let path = Text::new("Path to the JSON payload:").prompt()?;
    Ok((kind, PathBuf::from(path)))
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (kind, path) = match args.as_slice() {
        [kind, path] => (parse_form_kind(kind)?, PathBuf::from(path)),
        [] => prompt()?,
        _ => anyhow::bail!("Usage: marketplace-forms [<form-kind> <path>]"),
    };

    let report = validate_payload_file(kind, &path, &StandardRules::new())
        .with_context(|| format!("Failed to validate {}", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&report.result)?);

    if report.valid {
        info!("{} payload is valid", kind);
        Ok(ExitCode::SUCCESS)
    } else {
        info!("{} payload is invalid", kind);
        Ok(ExitCode::FAILURE)
    }
}
