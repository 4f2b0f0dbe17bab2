/// Inserts thousands separators into the integer part of a formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// `$1,234.50`
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

/// Window ranges are whole amounts: `$4,050`
pub fn format_whole_currency(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.0}", value)))
}

/// Up to three decimals, trailing zeros dropped: `1,234.5`
pub fn format_area(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    group_thousands(trimmed)
}
