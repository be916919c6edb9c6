//! Codesift CLI - parse a source file and print the extraction result.

use std::fs;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codesift::types::{EngineConfig, ParseOptions};
use codesift::{analyze_naming, EngineError, Language, SourceExtractor};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "codesift=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = EngineConfig::from_env();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: codesift <file> [language]");
    };
    let language = match args.next() {
        Some(tag) => Language::from_str(&tag)?,
        None => Language::from_path(&path)
            .context("could not infer the language from the file extension; pass it explicitly")?,
    };

    let source =
        fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    if source.len() > config.max_source_bytes {
        return Err(EngineError::SourceTooLarge {
            limit: config.max_source_bytes,
            actual: source.len(),
        }
        .into());
    }

    info!("Parsing {} as {}", path, language);

    let extractor = SourceExtractor::new();
    let result = extractor.parse(&source, &ParseOptions::new(language));
    let naming = extractor.analyze_naming(&result);

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!("{}", serde_json::to_string_pretty(&naming)?);

    Ok(())
}
