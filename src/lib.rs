//! # trifid-pohoda
//!
//! Converts invoice batches exported by Trifid Pokladna (a point-of-sale
//! system) into Stormware Pohoda XML import files.
//!
//! Trifid's own Pohoda export handles one invoice at a time, while its native
//! XML export covers the whole batch. This crate maps each native `faktura`
//! onto a Pohoda `dat:dataPackItem` so an accountant can import the batch in
//! one go.
//!
//! The mapping is intentionally partial: document numbering, dates, customer
//! name and first address line, and the zero-rate tax base are carried over;
//! everything else is a constant or left empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use trifid_pohoda::convert::convert_invoice_batch;
//! use trifid_pohoda::core::EnvelopeConfig;
//! use trifid_pohoda::pohoda::to_pohoda_xml;
//! use trifid_pohoda::trifid::from_trifid_xml;
//!
//! let source = r#"<trifid><faktura>
//!   <dokladHlavicka>
//!     <dokladCislo KodRady="FP" Cislo="2024001"/>
//!     <dokladVystaven>2024-03-01</dokladVystaven>
//!     <fakturacniUdaje>
//!       <cisloFaktury>FP2024001</cisloFaktury>
//!       <datumSplatnosti>2024-03-15</datumSplatnosti>
//!       <datumDPH>2024-03-01</datumDPH>
//!     </fakturacniUdaje>
//!     <odberatel><adresa><firma>ACME s.r.o.</firma><adresa1>Hlavní 1</adresa1></adresa></odberatel>
//!   </dokladHlavicka>
//!   <dokladPata><rozpisDPH><sazbaNulova Zaklad="1000,00"/></rozpisDPH></dokladPata>
//! </faktura></trifid>"#;
//!
//! let document = from_trifid_xml(source).unwrap();
//! let pack = convert_invoice_batch(&document, &EnvelopeConfig::default()).unwrap();
//! let xml = to_pohoda_xml(&pack).unwrap();
//!
//! assert!(xml.contains("<typ:priceNone>1000.00</typ:priceNone>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Errors, envelope configuration, amount normalization |
//! | `trifid` | Trifid export types and parser |
//! | `pohoda` | Pohoda import types, writer, Windows-1250 encoding |
//! | `convert` | Record mapper, batch driver, file adapters |
//! | `cli` (default) | The `trifid2pohoda` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "trifid")]
pub mod trifid;

#[cfg(feature = "pohoda")]
pub mod pohoda;

#[cfg(feature = "convert")]
pub mod convert;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
