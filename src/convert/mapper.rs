use crate::core::{ConvertError, normalize_decimal_separator};
use crate::pohoda::DataPackItem;
use crate::trifid::TrifidInvoice;

/// Look up a required source node, failing with its path.
fn require<'a, T>(node: Option<&'a T>, path: &'static str) -> Result<&'a T, ConvertError> {
    node.ok_or(ConvertError::MissingField { path })
}

fn require_text<'a>(node: &'a Option<String>, path: &'static str) -> Result<&'a str, ConvertError> {
    require(node.as_ref(), path).map(String::as_str)
}

/// Map one Trifid invoice onto a Pohoda data pack item.
///
/// Starts from [`DataPackItem::skeleton`] and copies a fixed set of fields.
/// Everything else Pohoda accepts (address details, tax ids, other VAT
/// brackets) is deliberately left blank. Any missing source field aborts the
/// mapping.
pub fn map_invoice(source: &TrifidInvoice) -> Result<DataPackItem, ConvertError> {
    let header = require(source.header.as_ref(), "dokladHlavicka")?;
    let number = require(header.number.as_ref(), "dokladHlavicka/dokladCislo")?;
    let billing = require(header.billing.as_ref(), "dokladHlavicka/fakturacniUdaje")?;
    let customer = require(header.customer.as_ref(), "dokladHlavicka/odberatel")?;
    let address = require(customer.address.as_ref(), "dokladHlavicka/odberatel/adresa")?;

    let series = require_text(&number.series_code, "dokladHlavicka/dokladCislo/@KodRady")?;
    let sequence = require_text(&number.sequence, "dokladHlavicka/dokladCislo/@Cislo")?;
    let invoice_number = require_text(
        &billing.invoice_number,
        "dokladHlavicka/fakturacniUdaje/cisloFaktury",
    )?;

    let mut item = DataPackItem::skeleton();
    item.id = format!("{series}{sequence}");

    let h = &mut item.invoice.header;
    h.number.number_requested = invoice_number.to_string();
    h.sym_var = invoice_number.to_string();
    h.date = require_text(&header.issued, "dokladHlavicka/dokladVystaven")?.to_string();
    h.date_due = require_text(
        &billing.due_date,
        "dokladHlavicka/fakturacniUdaje/datumSplatnosti",
    )?
    .to_string();
    h.date_tax =
        require_text(&billing.tax_date, "dokladHlavicka/fakturacniUdaje/datumDPH")?.to_string();

    h.partner.company =
        require_text(&address.company, "dokladHlavicka/odberatel/adresa/firma")?.to_string();
    h.partner.division = Some(
        require_text(&address.line1, "dokladHlavicka/odberatel/adresa/adresa1")?.to_string(),
    );

    let footer = require(source.footer.as_ref(), "dokladPata")?;
    let breakdown = require(footer.vat_breakdown.as_ref(), "dokladPata/rozpisDPH")?;
    let zero_rate = require(breakdown.zero_rate.as_ref(), "dokladPata/rozpisDPH/sazbaNulova")?;
    let base = require_text(&zero_rate.base, "dokladPata/rozpisDPH/sazbaNulova/@Zaklad")?;
    item.invoice.summary.home_currency.price_none = normalize_decimal_separator(base);

    Ok(item)
}
