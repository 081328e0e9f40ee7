//! Trifid → Pohoda conversion: record mapping, batch assembly, and file I/O.
//!
//! # Example
//!
//! ```no_run
//! use trifid_pohoda::convert;
//! use trifid_pohoda::core::EnvelopeConfig;
//!
//! convert::convert_invoice_batch_files(
//!     "invoices_trifid.xml",
//!     "invoices_pohoda.xml",
//!     &EnvelopeConfig::default(),
//! )
//! .unwrap();
//! ```

mod batch;
mod files;
mod mapper;

pub use batch::convert_invoice_batch;
pub use files::{convert_invoice_batch_files, load_trifid_xml, save_pohoda_xml};
pub use mapper::map_invoice;
