//! String validation functions

/// True iff the value trims to the empty string
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates the trimmed length of a value against a minimum
pub fn meets_min_length(s: &str, min: usize) -> bool {
    s.trim().chars().count() >= min
}
