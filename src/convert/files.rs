use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use tracing::info;

use super::convert_invoice_batch;
use crate::core::{ConvertError, EnvelopeConfig};
use crate::pohoda::{DataPack, to_pohoda_bytes};
use crate::trifid::{TrifidDocument, from_trifid_xml};

/// Read and parse a Trifid export (UTF-8, optional BOM).
pub fn load_trifid_xml(path: impl AsRef<Path>) -> Result<TrifidDocument, ConvertError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;

    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    let text = UTF_8
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            ConvertError::Encoding(format!("{} is not valid UTF-8", path.display()))
        })?;

    let document = from_trifid_xml(&text)?;
    info!(path = %path.display(), invoices = document.invoices.len(), "loaded Trifid export");
    Ok(document)
}

/// Encode a data pack and write it to `path` in a single write.
pub fn save_pohoda_xml(pack: &DataPack, path: impl AsRef<Path>) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let bytes = to_pohoda_bytes(pack)?;
    fs::write(path, &bytes).map_err(|e| ConvertError::io(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote Pohoda import file");
    Ok(())
}

/// Load, convert, and save. The destination is untouched unless every
/// invoice converted.
pub fn convert_invoice_batch_files(
    trifid_path: impl AsRef<Path>,
    pohoda_path: impl AsRef<Path>,
    envelope: &EnvelopeConfig,
) -> Result<DataPack, ConvertError> {
    let document = load_trifid_xml(trifid_path)?;
    let pack = convert_invoice_batch(&document, envelope)?;
    save_pohoda_xml(&pack, pohoda_path)?;
    Ok(pack)
}
