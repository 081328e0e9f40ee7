//! Stormware Pohoda XML import (destination vocabulary).
//!
//! A Pohoda import file is a `dat:dataPack` holding one `dat:dataPackItem`
//! per document. Pohoda is strict about element order, so each record is a
//! typed struct and the writer emits its fields in a fixed sequence.
//!
//! # Example
//!
//! ```
//! use trifid_pohoda::core::EnvelopeConfig;
//! use trifid_pohoda::pohoda::{self, DataPack, DataPackItem};
//!
//! let mut item = DataPackItem::skeleton();
//! item.id = "FP2024001".into();
//! let pack = DataPack { envelope: EnvelopeConfig::default(), items: vec![item] };
//!
//! let xml = pohoda::to_pohoda_xml(&pack).unwrap();
//! assert!(xml.contains(r#"<dat:dataPackItem id="FP2024001" version="2.0">"#));
//!
//! let bytes = pohoda::to_pohoda_bytes(&pack).unwrap();
//! assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"Windows-1250\"?>\r\n"));
//! ```

mod encoding;
mod write;
pub(crate) mod xml_utils;

pub use encoding::{OUTPUT_ENCODING, encode_windows_1250, to_crlf};
pub use write::{to_pohoda_bytes, to_pohoda_xml};

use serde::{Deserialize, Serialize};

use crate::core::EnvelopeConfig;

/// Pohoda XML schema version written on the pack, its items and invoices.
pub const SCHEMA_VERSION: &str = "2.0";

/// Stormware version_2 namespace URIs.
pub mod ns {
    pub const DAT: &str = "http://www.stormware.cz/schema/version_2/data.xsd";
    pub const INV: &str = "http://www.stormware.cz/schema/version_2/invoice.xsd";
    pub const TYP: &str = "http://www.stormware.cz/schema/version_2/type.xsd";
}

/// `inv:invoiceType` for sales invoices.
pub const INVOICE_TYPE_ISSUED: &str = "issuedInvoice";
/// `inv:accounting/typ:ids`: pre-set accounting code (receivables / revenue from goods).
pub const ACCOUNTING_CODE: &str = "311/604010";
/// `inv:classificationVAT/typ:classificationVATType`
pub const VAT_CLASSIFICATION_INLAND: &str = "inland";
/// `inv:text`
pub const INVOICE_TEXT: &str = "Faktury vydané";
/// `inv:paymentType/typ:paymentType`
pub const PAYMENT_TYPE_DRAFT: &str = "draft";
/// `inv:note`
pub const IMPORT_NOTE: &str = "Načteno z XML";
/// Value of every summary amount the mapping does not populate.
pub const ZERO_AMOUNT: &str = "0";

/// `dat:dataPack`: the whole import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPack {
    /// Envelope attributes (`id`, `application`, `ico`, `note`).
    pub envelope: EnvelopeConfig,
    /// One item per converted invoice, in source order.
    pub items: Vec<DataPackItem>,
}

impl DataPack {
    /// An envelope with no items yet.
    pub fn new(envelope: EnvelopeConfig) -> Self {
        Self {
            envelope,
            items: Vec::new(),
        }
    }
}

/// `dat:dataPackItem` wrapping one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPackItem {
    /// `@id`
    pub id: String,
    /// `inv:invoice`
    pub invoice: PohodaInvoice,
}

/// `inv:invoice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PohodaInvoice {
    /// `inv:invoiceHeader`
    pub header: InvoiceHeader,
    /// `inv:invoiceSummary`
    pub summary: InvoiceSummary,
}

/// `inv:invoiceHeader`. Field order is the element order Pohoda requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub invoice_type: String,
    pub number: InvoiceNumber,
    /// `inv:symVar`: variable symbol used for payment matching.
    pub sym_var: String,
    pub date: String,
    pub date_tax: String,
    pub date_due: String,
    /// `inv:accounting/typ:ids`
    pub accounting: String,
    /// `inv:classificationVAT/typ:classificationVATType`
    pub classification_vat: String,
    pub text: String,
    /// `inv:partnerIdentity/typ:address`
    pub partner: PartnerAddress,
    /// `inv:paymentType/typ:paymentType`
    pub payment_type: String,
    pub note: String,
}

/// `inv:number`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNumber {
    /// `typ:ids`: number series reference, left to Pohoda.
    pub ids: Option<String>,
    /// `typ:numberRequested`
    pub number_requested: String,
}

/// `inv:partnerIdentity/typ:address`. Only company and division are mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerAddress {
    pub company: String,
    pub division: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
    /// Company identification number (IČO).
    pub ico: Option<String>,
    /// VAT identification number (DIČ).
    pub dic: Option<String>,
}

/// `inv:invoiceSummary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    /// `inv:homeCurrency`
    pub home_currency: HomeCurrency,
}

/// `inv:homeCurrency` amounts in CZK, dot decimal separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCurrency {
    /// `typ:priceNone`: base of the zero-rate bracket.
    pub price_none: String,
    pub price_low: String,
    pub price_low_vat: String,
    pub price_high: String,
    pub price_high_vat: String,
}

impl Default for HomeCurrency {
    fn default() -> Self {
        Self {
            price_none: ZERO_AMOUNT.into(),
            price_low: ZERO_AMOUNT.into(),
            price_low_vat: ZERO_AMOUNT.into(),
            price_high: ZERO_AMOUNT.into(),
            price_high_vat: ZERO_AMOUNT.into(),
        }
    }
}

impl DataPackItem {
    /// The fixed record template: constants filled in, invoice-specific
    /// fields empty, unmapped fields `None`.
    pub fn skeleton() -> Self {
        Self {
            id: String::new(),
            invoice: PohodaInvoice {
                header: InvoiceHeader {
                    invoice_type: INVOICE_TYPE_ISSUED.into(),
                    number: InvoiceNumber::default(),
                    sym_var: String::new(),
                    date: String::new(),
                    date_tax: String::new(),
                    date_due: String::new(),
                    accounting: ACCOUNTING_CODE.into(),
                    classification_vat: VAT_CLASSIFICATION_INLAND.into(),
                    text: INVOICE_TEXT.into(),
                    partner: PartnerAddress::default(),
                    payment_type: PAYMENT_TYPE_DRAFT.into(),
                    note: IMPORT_NOTE.into(),
                },
                summary: InvoiceSummary {
                    home_currency: HomeCurrency::default(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_constants() {
        let item = DataPackItem::skeleton();
        let header = &item.invoice.header;
        assert_eq!(header.invoice_type, "issuedInvoice");
        assert_eq!(header.accounting, "311/604010");
        assert_eq!(header.classification_vat, "inland");
        assert_eq!(header.payment_type, "draft");
        assert!(header.number.ids.is_none());
        assert!(header.partner.city.is_none());
        assert!(header.partner.dic.is_none());
        assert_eq!(item.invoice.summary.home_currency, HomeCurrency::default());
    }
}
