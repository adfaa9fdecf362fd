//! Shared primitive types used across the entire pipeline.

/// Seller identifier as it appears in the input data.
pub type SellerId = String;

/// Product stock-keeping unit.
pub type Sku = String;

/// A monetary amount. Rounded to cents only when a report is built.
pub type Money = f64;

/// Round a monetary amount to two decimal places.
///
/// Rounds the exact binary value: 10.235 is stored just below the
/// half cent and becomes 10.23. Exact half-cent ties (only possible
/// for multiples of 1/8) round away from zero.
pub fn round_cents(value: Money) -> Money {
    let magnitude = value.abs();
    let is_exact_tie = (magnitude * 8.0).fract() == 0.0 && (magnitude * 100.0).fract() == 0.5;
    let rounded = if is_exact_tie {
        (magnitude * 100.0).ceil() / 100.0
    } else {
        format!("{magnitude:.2}").parse::<f64>().unwrap_or(magnitude)
    };
    rounded.copysign(value)
}
