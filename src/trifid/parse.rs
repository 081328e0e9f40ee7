use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};

use super::*;
use crate::core::ConvertError;

fn xml_err(e: impl std::fmt::Display) -> ConvertError {
    ConvertError::Xml(e.to_string())
}

/// Parse a Trifid export into its invoice records.
///
/// The parser is lenient about content: elements it does not know are
/// skipped and missing ones stay `None`. Only well-formedness and the root
/// element name are enforced here.
///
/// Leaf text is collected across comments and entity boundaries and trimmed
/// once when the leaf closes.
pub fn from_trifid_xml(xml: &str) -> Result<TrifidDocument, ConvertError> {
    let mut reader = Reader::from_str(xml);

    let mut parser = TrifidParser::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => parser.open(e)?,
            Ok(Event::Empty(ref e)) => {
                parser.open(e)?;
                parser.close();
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(xml_err)?;
                parser.text(&text)?;
            }
            Ok(Event::CData(e)) => {
                let raw = e.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|e| ConvertError::Encoding(format!("CDATA is not UTF-8: {e}")))?;
                parser.text(text)?;
            }
            Ok(Event::End(_)) => parser.close(),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ConvertError::Xml(format!(
                    "XML parse error at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    parser.finish()
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TrifidParser {
    document: TrifidDocument,
    current: Option<TrifidInvoice>,
    path: Vec<String>,
    seen_root: bool,
}

impl TrifidParser {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), ConvertError> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| ConvertError::Encoding(format!("element name is not UTF-8: {e}")))?
            .to_string();

        if self.path.is_empty() {
            if self.seen_root {
                return Err(ConvertError::Xml(format!(
                    "junk after document element: `{name}`"
                )));
            }
            if name != ROOT_ELEMENT {
                return Err(ConvertError::Xml(format!(
                    "expected root element `{ROOT_ELEMENT}`, found `{name}`"
                )));
            }
            self.seen_root = true;
        }
        self.path.push(name);

        if self.at_invoice() {
            self.current = Some(TrifidInvoice::default());
            return Ok(());
        }

        let Some(invoice) = self.current.as_mut() else {
            return Ok(());
        };
        let rel: Vec<&str> = self.path[2..].iter().map(String::as_str).collect();

        match rel.as_slice() {
            ["dokladHlavicka"] => {
                invoice.header.get_or_insert_with(Default::default);
            }
            ["dokladHlavicka", "dokladCislo"] => {
                if let Some(header) = invoice.header.as_mut() {
                    header.number = Some(DocumentNumber {
                        series_code: attribute(e, "KodRady")?,
                        sequence: attribute(e, "Cislo")?,
                    });
                }
            }
            ["dokladHlavicka", "fakturacniUdaje"] => {
                if let Some(header) = invoice.header.as_mut() {
                    header.billing.get_or_insert_with(Default::default);
                }
            }
            ["dokladHlavicka", "odberatel"] => {
                if let Some(header) = invoice.header.as_mut() {
                    header.customer.get_or_insert_with(Default::default);
                }
            }
            ["dokladHlavicka", "odberatel", "adresa"] => {
                if let Some(customer) = invoice.header.as_mut().and_then(|h| h.customer.as_mut()) {
                    customer.address.get_or_insert_with(Default::default);
                }
            }
            ["dokladPata"] => {
                invoice.footer.get_or_insert_with(Default::default);
            }
            ["dokladPata", "rozpisDPH"] => {
                if let Some(footer) = invoice.footer.as_mut() {
                    footer.vat_breakdown.get_or_insert_with(Default::default);
                }
            }
            ["dokladPata", "rozpisDPH", "sazbaNulova"] => {
                if let Some(breakdown) = invoice.footer.as_mut().and_then(|f| f.vat_breakdown.as_mut())
                {
                    breakdown.zero_rate = Some(VatRateLine {
                        base: attribute(e, "Zaklad")?,
                    });
                }
            }
            _ => {
                // A leaf that is present but empty is an empty string, not None.
                if let Some(slot) = leaf_slot(invoice, &rel) {
                    *slot = Some(String::new());
                }
            }
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), ConvertError> {
        if self.path.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            let place = if self.seen_root { "after" } else { "before" };
            return Err(ConvertError::Xml(format!(
                "text {place} document element: {:?}",
                text.trim()
            )));
        }
        if self.path.len() < 3 {
            return Ok(());
        }
        let Some(invoice) = self.current.as_mut() else {
            return Ok(());
        };
        let rel: Vec<&str> = self.path[2..].iter().map(String::as_str).collect();
        if let Some(Some(value)) = leaf_slot(invoice, &rel) {
            value.push_str(text);
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.path.len() >= 3 {
            if let Some(invoice) = self.current.as_mut() {
                let rel: Vec<&str> = self.path[2..].iter().map(String::as_str).collect();
                if let Some(Some(value)) = leaf_slot(invoice, &rel) {
                    let trimmed = value.trim();
                    if trimmed.len() != value.len() {
                        *value = trimmed.to_string();
                    }
                }
            }
        }
        if self.at_invoice() {
            if let Some(invoice) = self.current.take() {
                trace!(?invoice, "parsed record");
                self.document.invoices.push(invoice);
                debug!(index = self.document.invoices.len() - 1, "parsed Trifid invoice");
            }
        }
        self.path.pop();
    }

    fn at_invoice(&self) -> bool {
        self.path.len() == 2 && self.path[1] == INVOICE_ELEMENT
    }

    fn finish(self) -> Result<TrifidDocument, ConvertError> {
        if !self.seen_root {
            return Err(ConvertError::Xml("document has no root element".into()));
        }
        if !self.path.is_empty() {
            return Err(ConvertError::Xml(format!(
                "unexpected end of document inside `{}`",
                self.path.join("/")
            )));
        }
        Ok(self.document)
    }
}

/// Resolve the text-bearing leaf at `rel` (path below `faktura`), if it is
/// one the mapping reads and its parent blocks exist.
fn leaf_slot<'a>(invoice: &'a mut TrifidInvoice, rel: &[&str]) -> Option<&'a mut Option<String>> {
    match rel {
        ["dokladHlavicka", "dokladVystaven"] => Some(&mut invoice.header.as_mut()?.issued),
        ["dokladHlavicka", "fakturacniUdaje", leaf] => {
            let billing = invoice.header.as_mut()?.billing.as_mut()?;
            match *leaf {
                "cisloFaktury" => Some(&mut billing.invoice_number),
                "datumSplatnosti" => Some(&mut billing.due_date),
                "datumDPH" => Some(&mut billing.tax_date),
                _ => None,
            }
        }
        ["dokladHlavicka", "odberatel", "adresa", leaf] => {
            let address = invoice
                .header
                .as_mut()?
                .customer
                .as_mut()?
                .address
                .as_mut()?;
            match *leaf {
                "firma" => Some(&mut address.company),
                "adresa1" => Some(&mut address.line1),
                _ => None,
            }
        }
        _ => None,
    }
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, ConvertError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ConvertError::Xml(format!("malformed attribute: {e}")))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr.unescape_value().map_err(xml_err)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_INVOICE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<trifid>
  <faktura>
    <dokladHlavicka>
      <dokladCislo KodRady="FP" Cislo="2024001"/>
      <dokladVystaven>2024-03-01</dokladVystaven>
      <fakturacniUdaje>
        <cisloFaktury>FP2024001</cisloFaktury>
        <datumSplatnosti>2024-03-15</datumSplatnosti>
        <datumDPH>2024-03-01</datumDPH>
      </fakturacniUdaje>
      <odberatel>
        <adresa>
          <firma>ACME &amp; syn s.r.o.</firma>
          <adresa1/>
        </adresa>
      </odberatel>
    </dokladHlavicka>
    <dokladPata>
      <rozpisDPH>
        <sazbaNulova Zaklad="1000,00"/>
        <sazbaSnizena Zaklad="0,00"/>
      </rozpisDPH>
    </dokladPata>
  </faktura>
</trifid>"#;

    #[test]
    fn parses_mapped_fields() {
        let doc = from_trifid_xml(ONE_INVOICE).unwrap();
        assert_eq!(doc.invoices.len(), 1);

        let header = doc.invoices[0].header.as_ref().unwrap();
        let number = header.number.as_ref().unwrap();
        assert_eq!(number.series_code.as_deref(), Some("FP"));
        assert_eq!(number.sequence.as_deref(), Some("2024001"));
        assert_eq!(header.issued.as_deref(), Some("2024-03-01"));

        let billing = header.billing.as_ref().unwrap();
        assert_eq!(billing.invoice_number.as_deref(), Some("FP2024001"));
        assert_eq!(billing.due_date.as_deref(), Some("2024-03-15"));
        assert_eq!(billing.tax_date.as_deref(), Some("2024-03-01"));

        let address = header.customer.as_ref().unwrap().address.as_ref().unwrap();
        assert_eq!(address.company.as_deref(), Some("ACME & syn s.r.o."));
        assert_eq!(address.line1.as_deref(), Some(""));

        let zero = doc.invoices[0]
            .footer
            .as_ref()
            .and_then(|f| f.vat_breakdown.as_ref())
            .and_then(|b| b.zero_rate.as_ref())
            .unwrap();
        assert_eq!(zero.base.as_deref(), Some("1000,00"));
    }

    #[test]
    fn missing_blocks_stay_none() {
        let doc = from_trifid_xml("<trifid><faktura><dokladHlavicka/></faktura></trifid>").unwrap();
        let inv = &doc.invoices[0];
        assert!(inv.footer.is_none());
        let header = inv.header.as_ref().unwrap();
        assert!(header.customer.is_none());
        assert!(header.number.is_none());
    }

    #[test]
    fn nested_faktura_is_not_a_record() {
        let doc = from_trifid_xml("<trifid><export><faktura/></export><faktura/></trifid>").unwrap();
        assert_eq!(doc.invoices.len(), 1);
    }

    #[test]
    fn rejects_foreign_root() {
        let err = from_trifid_xml("<dat:dataPack/>").unwrap_err();
        assert!(err.to_string().contains("expected root element `trifid`"));
    }

    #[test]
    fn rejects_empty_document() {
        assert!(from_trifid_xml("").is_err());
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(from_trifid_xml("<trifid><faktura></trifid>").is_err());
    }

    #[test]
    fn rejects_second_root() {
        let xml = format!("<trifid/>{}", ONE_INVOICE.trim_start_matches(|c| c != '\n'));
        let err = from_trifid_xml(&xml).unwrap_err();
        assert!(matches!(err, ConvertError::Xml(_)));
        assert!(err.to_string().contains("junk after document element"));
    }

    #[test]
    fn rejects_text_after_root() {
        let xml = format!("{ONE_INVOICE}garbage text");
        let err = from_trifid_xml(&xml).unwrap_err();
        assert!(matches!(err, ConvertError::Xml(_)));
        assert!(from_trifid_xml("stray<trifid/>").is_err());
    }

    #[test]
    fn whitespace_around_root_is_fine() {
        let xml = format!("{ONE_INVOICE}\r\n\r\n");
        assert_eq!(from_trifid_xml(&xml).unwrap().invoices.len(), 1);
    }

    #[test]
    fn leaf_text_is_joined_before_trimming() {
        let xml = "<trifid><faktura><dokladHlavicka><odberatel><adresa>\
                   <firma>\n  ACME <!--c--> s.r.o.  \n</firma>\
                   <adresa1>  </adresa1>\
                   </adresa></odberatel></dokladHlavicka></faktura></trifid>";
        let doc = from_trifid_xml(xml).unwrap();
        let address = doc.invoices[0]
            .header
            .as_ref()
            .and_then(|h| h.customer.as_ref())
            .and_then(|c| c.address.as_ref())
            .unwrap();
        assert_eq!(address.company.as_deref(), Some("ACME  s.r.o."));
        assert_eq!(address.line1.as_deref(), Some(""));
    }
}
