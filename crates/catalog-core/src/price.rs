//! Price Input Coercion

/// Parse raw price input text into a number
///
/// Empty or non-numeric input collapses to 0. Surrounding whitespace is
/// ignored, as number inputs do. Non-finite results (NaN, inf) also become 0.
pub fn coerce_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
