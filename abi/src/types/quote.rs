use serde::Serialize;

/// Price preview for the currently selected range.
///
/// Always computable: the day count floors at one even when the range is
/// invalid, so the form can show a rate before a valid range exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub total_days: i64,
    pub total_price: f64,
}
