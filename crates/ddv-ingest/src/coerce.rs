//! Coercion of loosely typed spreadsheet cells.

/// A coerced value plus the reason it differs from the raw cell, if it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coerced<T> {
    pub value: T,
    pub note: Option<String>,
}

impl<T> Coerced<T> {
    fn clean(value: T) -> Self {
        Self { value, note: None }
    }

    fn defaulted(value: T, note: String) -> Self {
        Self {
            value,
            note: Some(note),
        }
    }
}

/// Coerce a precision/scale cell to a non-negative integer.
///
/// Blank cells become 0 silently. Spreadsheet exports often write integral
/// numbers as `10.0`, which are accepted and truncated. Anything else
/// (negative, non-numeric, non-finite) becomes 0 with a note.
pub fn coerce_dimension(raw: &str) -> Coerced<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Coerced::clean(0);
    }
    if let Ok(value) = trimmed.parse::<u32>() {
        return Coerced::clean(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) => {
            Coerced::clean(value.trunc() as u32)
        }
        Ok(_) => Coerced::defaulted(0, format!("out-of-range value '{trimmed}' defaulted to 0")),
        Err(_) => Coerced::defaulted(0, format!("non-numeric value '{trimmed}' defaulted to 0")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_zero_without_note() {
        assert_eq!(coerce_dimension(""), Coerced::clean(0));
        assert_eq!(coerce_dimension("  "), Coerced::clean(0));
        assert_eq!(coerce_dimension("NaN"), Coerced::clean(0));
    }

    #[test]
    fn integers_and_integral_floats() {
        assert_eq!(coerce_dimension("12").value, 12);
        assert_eq!(coerce_dimension(" 10.0 ").value, 10);
        assert!(coerce_dimension("10.0").note.is_none());
    }

    #[test]
    fn garbage_defaults_with_note() {
        let coerced = coerce_dimension("ten");
        assert_eq!(coerced.value, 0);
        assert!(coerced.note.is_some_and(|note| note.contains("non-numeric")));
        let negative = coerce_dimension("-3");
        assert_eq!(negative.value, 0);
        assert!(negative.note.is_some());
    }
}
