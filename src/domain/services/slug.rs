/// Lowercase-hyphenated slug used for category codes: ASCII alphanumerics
/// kept lowercased, every other run of characters collapsed to a single
/// hyphen, no leading or trailing hyphen. Idempotent.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}
