/// Drops `<...>` tag runs and turns non-breaking spaces into plain ones.
/// Used only to decide whether an HTML consent field carries visible text;
/// the stored value keeps its markup.
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
}

pub fn has_visible_text(html: &str) -> bool {
    !strip_html(html).trim().is_empty()
}

/// Deliberately loose: one '@', non-empty local part, dotted domain. Real
/// deliverability is the mail provider's problem.
pub fn is_valid_email(input: &str) -> bool {
    let s = input.trim();
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && domain.len() >= 3
}
