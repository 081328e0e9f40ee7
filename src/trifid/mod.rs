//! Trifid Pokladna native invoice export (source vocabulary).
//!
//! Trifid writes a batch of invoices as UTF-8 XML:
//!
//! ```xml
//! <trifid>
//!   <faktura>
//!     <dokladHlavicka>
//!       <dokladCislo KodRady="FP" Cislo="2024001"/>
//!       <dokladVystaven>2024-03-01</dokladVystaven>
//!       <fakturacniUdaje>
//!         <cisloFaktury>FP2024001</cisloFaktury>
//!         <datumSplatnosti>2024-03-15</datumSplatnosti>
//!         <datumDPH>2024-03-01</datumDPH>
//!       </fakturacniUdaje>
//!       <odberatel><adresa><firma>ACME s.r.o.</firma><adresa1>Hlavní 1</adresa1></adresa></odberatel>
//!     </dokladHlavicka>
//!     <dokladPata><rozpisDPH><sazbaNulova Zaklad="1000,00"/></rozpisDPH></dokladPata>
//!   </faktura>
//! </trifid>
//! ```
//!
//! Only the fields the Pohoda mapping reads are kept. Every node is optional
//! because the export is not validated; the mapper decides what is required.

mod parse;

pub use parse::from_trifid_xml;

use serde::{Deserialize, Serialize};

/// Root element name of a Trifid export.
pub const ROOT_ELEMENT: &str = "trifid";
/// Element name of one invoice record.
pub const INVOICE_ELEMENT: &str = "faktura";

/// A parsed Trifid export: the invoices in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrifidDocument {
    pub invoices: Vec<TrifidInvoice>,
}

/// One `faktura` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrifidInvoice {
    /// `dokladHlavicka`
    pub header: Option<DocumentHeader>,
    /// `dokladPata`
    pub footer: Option<DocumentFooter>,
}

/// `dokladHlavicka`: numbering, dates, and customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// `dokladCislo`
    pub number: Option<DocumentNumber>,
    /// `dokladVystaven`: issue date as exported (ISO `YYYY-MM-DD`).
    pub issued: Option<String>,
    /// `fakturacniUdaje`
    pub billing: Option<BillingDetails>,
    /// `odberatel`
    pub customer: Option<Customer>,
}

/// `dokladCislo` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNumber {
    /// `@KodRady`: number series code, e.g. "FP".
    pub series_code: Option<String>,
    /// `@Cislo`: sequence number within the series.
    pub sequence: Option<String>,
}

/// `fakturacniUdaje`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    /// `cisloFaktury`
    pub invoice_number: Option<String>,
    /// `datumSplatnosti`
    pub due_date: Option<String>,
    /// `datumDPH`
    pub tax_date: Option<String>,
}

/// `odberatel`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// `adresa`
    pub address: Option<CustomerAddress>,
}

/// `odberatel/adresa`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddress {
    /// `firma`
    pub company: Option<String>,
    /// `adresa1`
    pub line1: Option<String>,
}

/// `dokladPata`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFooter {
    /// `rozpisDPH`
    pub vat_breakdown: Option<VatBreakdown>,
}

/// `rozpisDPH`: per-rate VAT breakdown. Only the zero-rate bracket is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// `sazbaNulova`
    pub zero_rate: Option<VatRateLine>,
}

/// One rate bracket of the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRateLine {
    /// `@Zaklad`: tax base with a comma decimal separator, e.g. "1000,00".
    pub base: Option<String>,
}
