use rust_decimal::Decimal;

/// Format a crore amount the Indian way: the last three digits, then pairs.
/// e.g. `12345678.9` → `"₹1,23,45,678.90"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = format!("{:.2}", val.abs().round_dp(2));
    let (whole, paise) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if val.is_sign_negative() && !val.is_zero() { "-" } else { "" };
    format!("{sign}₹{}.{paise}", group_lakh(whole))
}

fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (lakhs, hundreds) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in lakhs.chars().enumerate() {
        if i > 0 && (lakhs.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(hundreds);
    out
}

/// Format a percentage with 2 decimal places, e.g. `"12.50%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.2}%", val.round_dp(2))
}

/// Cut `s` to at most `max` characters, marking the cut with "…".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    match (max, s.char_indices().nth(max)) {
        (0, _) => String::new(),
        (_, None) => s.to_string(),
        (_, Some(_)) => {
            let end = s.char_indices().nth(max - 1).map_or(0, |(i, _)| i);
            format!("{}…", &s[..end])
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
