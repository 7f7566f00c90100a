use abi::{DateRange, PriceQuote};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Quote the selected range at the vehicle's per-day rate.
///
/// Partial days round up so a range of one day and two hours bills as two
/// days, and the count floors at one so the form can always show a preview,
/// valid range or not. A missing rate quotes to zero.
pub fn quote(range: DateRange, per_day_rate: Option<f64>) -> PriceQuote {
    let millis = (range.end - range.start).num_milliseconds();
    let total_days = millis.div_euclid(MILLIS_PER_DAY)
        + if millis.rem_euclid(MILLIS_PER_DAY) > 0 { 1 } else { 0 };
    let total_days = total_days.max(1);
    PriceQuote {
        total_days,
        total_price: total_days as f64 * per_day_rate.unwrap_or(0.0),
    }
}
