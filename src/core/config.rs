use serde::{Deserialize, Serialize};

/// Default `dat:dataPack/@id`.
pub const DEFAULT_PACK_ID: &str = "00001";
/// Default `dat:dataPack/@note`.
pub const DEFAULT_PACK_NOTE: &str = "Import FA";

/// Attributes of the `dat:dataPack` envelope that are not derived from the invoices.
///
/// The namespace declarations and the schema version are fixed by the Pohoda
/// import format and live in [`crate::pohoda`]; everything an operator might
/// want to change is here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Data pack identifier.
    pub id: String,
    /// Name of the exporting application (left empty by default).
    pub application: String,
    /// Company identification number (IČO) of the importing unit.
    pub ico: String,
    /// Free-text note shown in the Pohoda import log.
    pub note: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_PACK_ID.into(),
            application: String::new(),
            ico: String::new(),
            note: DEFAULT_PACK_NOTE.into(),
        }
    }
}
