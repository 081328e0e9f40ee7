/// Convert a Czech-locale amount ("1234,50") to the dot-decimal form Pohoda
/// expects ("1234.50").
///
/// Every comma becomes a dot; no other character is touched, so the
/// conversion is idempotent on values that already use a dot.
pub fn normalize_decimal_separator(amount: &str) -> String {
    amount.replace(',', ".")
}
