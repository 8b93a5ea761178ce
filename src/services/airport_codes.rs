//! Airport code normalization.

/// Reduce a raw location code to its canonical 3-letter airport code.
///
/// Raw codes of five or more characters carry the canonical code at
/// character positions [2,5); shorter values are assumed canonical already.
/// No registry validation happens here: unknown codes pass through
/// unchanged and simply fail to match in later stages.
pub fn normalize_airport_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() >= 5 {
        chars[2..5].iter().collect::<String>().to_uppercase()
    } else {
        code.to_uppercase()
    }
}
