use tracing::{debug, info, warn};

use super::map_invoice;
use crate::core::{ConvertError, EnvelopeConfig};
use crate::pohoda::DataPack;
use crate::trifid::TrifidDocument;

/// Convert every invoice of a Trifid export into one Pohoda data pack.
///
/// Items keep the source order. The first invoice that fails to map aborts
/// the batch; its zero-based position is reported in
/// [`ConvertError::Invoice`].
pub fn convert_invoice_batch(
    document: &TrifidDocument,
    envelope: &EnvelopeConfig,
) -> Result<DataPack, ConvertError> {
    if document.invoices.is_empty() {
        warn!("source document contains no invoices");
    }

    let mut pack = DataPack::new(envelope.clone());
    for (index, invoice) in document.invoices.iter().enumerate() {
        let item = map_invoice(invoice).map_err(|e| ConvertError::Invoice {
            index,
            source: Box::new(e),
        })?;
        debug!(index, id = %item.id, "mapped invoice");
        pack.items.push(item);
    }

    info!(invoices = pack.items.len(), "converted invoice batch");
    Ok(pack)
}
