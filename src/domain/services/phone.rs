/// Strips everything but digits, keeping a single leading '+'. Idempotent.
pub fn normalize_phone(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.chars().enumerate() {
        if i == 0 && c == '+' {
            out.push('+');
        } else if c.is_ascii_digit() {
            out.push(c);
        }
    }
    out
}

/// Accepts an already-normalized number: optional leading '+', 7 to 15
/// digits.
pub fn is_valid_phone(normalized: &str) -> bool {
    let digits = normalized.strip_prefix('+').unwrap_or(normalized);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
