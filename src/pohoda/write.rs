use super::xml_utils::XmlWriter;
use super::*;
use crate::core::ConvertError;

/// Serialize a data pack to pretty-printed XML text.
///
/// The returned string uses `\n` line endings and declares
/// [`OUTPUT_ENCODING`]; use [`to_pohoda_bytes`] for the on-disk form.
pub fn to_pohoda_xml(pack: &DataPack) -> Result<String, ConvertError> {
    let mut w = XmlWriter::new(OUTPUT_ENCODING)?;
    let env = &pack.envelope;

    w.start_element_with_attrs(
        "dat:dataPack",
        &[
            ("xmlns:dat", ns::DAT),
            ("xmlns:inv", ns::INV),
            ("xmlns:typ", ns::TYP),
            ("id", &env.id),
            ("application", &env.application),
            ("ico", &env.ico),
            ("version", SCHEMA_VERSION),
            ("note", &env.note),
        ],
    )?;

    for item in &pack.items {
        write_item(&mut w, item)?;
    }

    w.end_element("dat:dataPack")?;
    w.into_string()
}

/// Serialize a data pack to the bytes Pohoda imports: Windows-1250, CRLF.
pub fn to_pohoda_bytes(pack: &DataPack) -> Result<Vec<u8>, ConvertError> {
    let xml = to_pohoda_xml(pack)?;
    let (bytes, lossy) = encode_windows_1250(&to_crlf(&xml));
    if lossy {
        tracing::warn!(
            "some characters are not representable in {OUTPUT_ENCODING}; \
             written as numeric character references"
        );
    }
    Ok(bytes)
}

fn write_item(w: &mut XmlWriter, item: &DataPackItem) -> Result<(), ConvertError> {
    w.start_element_with_attrs(
        "dat:dataPackItem",
        &[("id", &item.id), ("version", SCHEMA_VERSION)],
    )?;
    w.start_element_with_attrs("inv:invoice", &[("version", SCHEMA_VERSION)])?;
    write_header(w, &item.invoice.header)?;
    write_summary(w, &item.invoice.summary)?;
    w.end_element("inv:invoice")?;
    w.end_element("dat:dataPackItem")?;
    Ok(())
}

fn write_header(w: &mut XmlWriter, h: &InvoiceHeader) -> Result<(), ConvertError> {
    w.start_element("inv:invoiceHeader")?;
    w.text_element("inv:invoiceType", &h.invoice_type)?;

    w.start_element("inv:number")?;
    w.optional_element("typ:ids", h.number.ids.as_deref())?;
    w.text_element("typ:numberRequested", &h.number.number_requested)?;
    w.end_element("inv:number")?;

    w.text_element("inv:symVar", &h.sym_var)?;
    w.text_element("inv:date", &h.date)?;
    w.text_element("inv:dateTax", &h.date_tax)?;
    w.text_element("inv:dateDue", &h.date_due)?;
    w.wrapped_text_element("inv:accounting", "typ:ids", &h.accounting)?;
    w.wrapped_text_element(
        "inv:classificationVAT",
        "typ:classificationVATType",
        &h.classification_vat,
    )?;
    w.text_element("inv:text", &h.text)?;
    write_partner(w, &h.partner)?;
    w.wrapped_text_element("inv:paymentType", "typ:paymentType", &h.payment_type)?;
    w.text_element("inv:note", &h.note)?;
    w.end_element("inv:invoiceHeader")?;
    Ok(())
}

fn write_partner(w: &mut XmlWriter, p: &PartnerAddress) -> Result<(), ConvertError> {
    w.start_element("inv:partnerIdentity")?;
    w.start_element("typ:address")?;
    w.text_element("typ:company", &p.company)?;
    w.optional_element("typ:division", p.division.as_deref())?;
    w.optional_element("typ:city", p.city.as_deref())?;
    w.optional_element("typ:street", p.street.as_deref())?;
    w.optional_element("typ:zip", p.zip.as_deref())?;
    w.optional_element("typ:ico", p.ico.as_deref())?;
    w.optional_element("typ:dic", p.dic.as_deref())?;
    w.end_element("typ:address")?;
    w.end_element("inv:partnerIdentity")?;
    Ok(())
}

fn write_summary(w: &mut XmlWriter, s: &InvoiceSummary) -> Result<(), ConvertError> {
    let hc = &s.home_currency;
    w.start_element("inv:invoiceSummary")?;
    w.start_element("inv:homeCurrency")?;
    w.text_element("typ:priceNone", &hc.price_none)?;
    w.text_element("typ:priceLow", &hc.price_low)?;
    w.text_element("typ:priceLowVAT", &hc.price_low_vat)?;
    w.text_element("typ:priceHigh", &hc.price_high)?;
    w.text_element("typ:priceHighVAT", &hc.price_high_vat)?;
    w.end_element("inv:homeCurrency")?;
    w.end_element("inv:invoiceSummary")?;
    Ok(())
}
