//! Verify command CLI handler.

use anyhow::Context;
use schemars::JsonSchema;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use user_list_seeder::{Document, DocumentSummary, PresentationDescriptor};

/// JSON output for verify command
#[derive(Serialize, JsonSchema)]
pub struct VerifyJsonOutput {
    pub file: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
}

fn check(text: &str, strict: bool) -> anyhow::Result<DocumentSummary> {
    let document = Document::from_json(text)?;
    let summary = document.verify()?;

    if strict && document.config != PresentationDescriptor::user_list() {
        anyhow::bail!(
            "config differs from the built-in descriptor: {}",
            serde_json::to_string(&document.config)?
        );
    }

    Ok(summary)
}

pub fn run(file: PathBuf, strict: bool, json: bool) -> anyhow::Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("cannot read {}", file.display()))?;

    let result = check(&text, strict);

    if json {
        let output_json = match &result {
            Ok(summary) => VerifyJsonOutput {
                file: file.display().to_string(),
                valid: true,
                error: None,
                summary: Some(summary.clone()),
            },
            Err(e) => VerifyJsonOutput {
                file: file.display().to_string(),
                valid: false,
                error: Some(e.to_string()),
                summary: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
    }

    let summary = result.with_context(|| format!("{} is not a valid user list", file.display()))?;

    if !json {
        eprintln!("✓ {} is a valid user list", file.display());
        eprintln!("  Records: {}", summary.records);
        if let (Some(min), Some(max)) = (summary.min_age, summary.max_age) {
            eprintln!(
                "  Ages: {}..={} ({} distinct)",
                min, max, summary.distinct_ages
            );
        }
    }

    Ok(())
}
