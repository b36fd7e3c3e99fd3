mod parsers;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use xraymat_data::{ReferenceData, VersionRecord};

/// Pack raw X-ray coefficient tables and standard compositions into the
/// compressed blob read by `xraymat::Registry::open`.
#[derive(Parser, Debug)]
#[command(name = "xraymat-generate", version)]
struct Args {
    /// Directory of per-element tables, one `<symbol>.txt` (or `.dat`) per element
    #[arg(long)]
    elements: PathBuf,

    /// JSON list of standard compositions
    #[arg(long)]
    compositions: Option<PathBuf>,

    /// Directory of standard-material absorption tables, one `<material>.txt` per material
    #[arg(long)]
    absorption: Option<PathBuf>,

    /// Output blob path
    #[arg(long, default_value = "xraymat.bin.zst")]
    output: PathBuf,

    /// zstd compression level
    #[arg(long, default_value_t = 19)]
    level: i32,

    /// Version tag stored alongside the tables
    #[arg(long, default_value = concat!("xraymat-generate ", env!("CARGO_PKG_VERSION")))]
    tag: String,

    /// Release date stored alongside the tables
    #[arg(long, default_value = "")]
    date: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if !args.elements.is_dir() {
        bail!("element table directory {:?} not found", args.elements);
    }
    info!(dir = ?args.elements, "parsing element tables");
    let coefficients = parsers::parse_element_dir(&args.elements)?;
    info!(tables = coefficients.len(), "parsed coefficient tables");

    let compositions = match &args.compositions {
        Some(path) => {
            let records = parsers::parse_compositions(path)?;
            info!(materials = records.len(), "parsed standard compositions");
            records
        }
        None => Vec::new(),
    };

    let absorption = match &args.absorption {
        Some(dir) => {
            let records = parsers::parse_absorption_dir(dir)?;
            info!(materials = records.len(), "parsed absorption tables");
            records
        }
        None => Vec::new(),
    };

    let data = ReferenceData {
        version: vec![VersionRecord {
            tag: args.tag.clone(),
            date: args.date.clone(),
            notes: format!(
                "{} coefficient tables, {} standard compositions, {} absorption tables",
                coefficients.len(),
                compositions.len(),
                absorption.len()
            ),
        }],
        coefficients,
        compositions,
        absorption,
    };

    let serialized = postcard::to_allocvec(&data).context("postcard serialization failed")?;
    info!(bytes = serialized.len(), "serialized with postcard");

    let compressed = zstd::encode_all(&serialized[..], args.level)
        .context("zstd compression failed")?;
    info!(
        bytes = compressed.len(),
        level = args.level,
        ratio = serialized.len() as f64 / compressed.len() as f64,
        "compressed with zstd"
    );

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {parent:?}"))?;
    }
    std::fs::write(&args.output, &compressed)
        .with_context(|| format!("failed to write {:?}", args.output))?;
    info!(path = ?args.output, "wrote blob");

    verify(&compressed, &data)?;
    debug!("round-trip verified");
    Ok(())
}

/// Decode the blob again and check it reproduces what was written.
fn verify(compressed: &[u8], expected: &ReferenceData) -> Result<()> {
    let decompressed = zstd::decode_all(compressed).context("zstd decompression failed")?;
    let decoded: ReferenceData =
        postcard::from_bytes(&decompressed).context("postcard deserialization failed")?;
    if decoded.coefficients != expected.coefficients
        || decoded.compositions != expected.compositions
        || decoded.absorption != expected.absorption
    {
        bail!("round-trip mismatch after compression");
    }
    Ok(())
}
