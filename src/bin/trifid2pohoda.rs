//! Converts an XML batch of invoices from Trifid Pokladna to Stormware Pohoda.
//!
//! ```text
//! trifid2pohoda invoices_trifid.xml invoices_pohoda.xml
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default: `warn`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trifid_pohoda::convert::convert_invoice_batch_files;
use trifid_pohoda::core::EnvelopeConfig;

/// Convert XML with invoices from Trifid to Pohoda
#[derive(Parser)]
#[command(name = "trifid2pohoda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Trifid export (UTF-8)
    #[arg(value_name = "TRIFID_XML")]
    trifid_xml: PathBuf,

    /// Pohoda import file to write (Windows-1250)
    #[arg(value_name = "POHODA_XML")]
    pohoda_xml: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let envelope = EnvelopeConfig::default();
    let pack = convert_invoice_batch_files(&cli.trifid_xml, &cli.pohoda_xml, &envelope)
        .with_context(|| {
            format!(
                "converting {} to {}",
                cli.trifid_xml.display(),
                cli.pohoda_xml.display()
            )
        })?;

    tracing::info!(invoices = pack.items.len(), "done");
    Ok(())
}
