#![no_main]

use libfuzzer_sys::fuzz_target;
use trifid_pohoda::convert::convert_invoice_batch;
use trifid_pohoda::core::EnvelopeConfig;
use trifid_pohoda::pohoda::to_pohoda_bytes;
use trifid_pohoda::trifid::from_trifid_xml;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = from_trifid_xml(s) {
            if let Ok(pack) = convert_invoice_batch(&doc, &EnvelopeConfig::default()) {
                // Anything that maps must also serialize.
                let bytes = to_pohoda_bytes(&pack).expect("serialization failed");
                for (i, b) in bytes.iter().enumerate() {
                    if *b == b'\n' {
                        assert_eq!(bytes[i - 1], b'\r', "bare LF in output");
                    }
                }
                assert_eq!(pack.items.len(), doc.invoices.len());
            }
        }
    }
});
