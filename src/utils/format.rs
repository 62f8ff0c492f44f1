/// Dollar amount with thousands separators and no decimals, e.g. `$1,234,567`.
pub fn format_usd(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let grouped = group_thousands(&rounded);
    if amount < 0.0 && rounded != "0" {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ROI fraction as a percentage with two decimals, e.g. `0.1234` -> `12.34%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// First 10 characters of an address.
pub fn address_prefix(address: &str) -> &str {
    match address.char_indices().nth(10) {
        Some((idx, _)) => &address[..idx],
        None => address,
    }
}

/// Display name if present, otherwise the truncated address.
pub fn trader_label(display_name: Option<&str>, address: &str) -> String {
    match display_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{}...", address_prefix(address)),
    }
}
