/// Uppercases and drops all whitespace. Idempotent.
pub fn normalize_iban(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Registered IBAN length per country code, for the countries the product
/// supports billing in.
fn country_length(code: &str) -> Option<usize> {
    let len = match code {
        "AT" => 20,
        "BE" => 16,
        "BG" => 22,
        "CH" => 21,
        "CY" => 28,
        "CZ" => 24,
        "DE" => 22,
        "DK" => 18,
        "EE" => 20,
        "ES" => 24,
        "FI" => 18,
        "FR" => 27,
        "GB" => 22,
        "GR" => 27,
        "HR" => 21,
        "HU" => 28,
        "IE" => 22,
        "IT" => 27,
        "LI" => 21,
        "LT" => 20,
        "LU" => 20,
        "LV" => 21,
        "MC" => 27,
        "MT" => 31,
        "NL" => 18,
        "NO" => 15,
        "PL" => 28,
        "PT" => 25,
        "RO" => 24,
        "SE" => 24,
        "SI" => 19,
        "SK" => 24,
        "SM" => 27,
        _ => return None,
    };
    Some(len)
}

/// ISO 7064 MOD-97-10 check: normalize, verify the country length, move the
/// first four characters to the end, expand letters to two-digit ordinals
/// (A=10 .. Z=35) and require the numeral string mod 97 to equal 1.
pub fn is_valid_iban(input: &str) -> bool {
    let iban = normalize_iban(input);
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }
    let bytes = iban.as_bytes();
    if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
        return false;
    }
    if !iban
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return false;
    }
    match country_length(&iban[..2]) {
        Some(expected) if iban.len() == expected => {}
        _ => return false,
    }

    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    let mut remainder: u32 = 0;
    for c in rearranged.chars() {
        if c.is_ascii_digit() {
            remainder = (remainder * 10 + (c as u32 - '0' as u32)) % 97;
        } else {
            remainder = (remainder * 100 + (c as u32 - 'A' as u32 + 10)) % 97;
        }
    }
    remainder == 1
}
