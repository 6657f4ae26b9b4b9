//! Number, currency and percentage formatting

use num_format::{Locale, ToFormattedString};

/// Values above this are shown in compact notation
const COMPACT_THRESHOLD: f64 = 500_000_000.0;
/// Positive values below this are shown as "< $0.0001"
const DUST_THRESHOLD: f64 = 0.0001;

/// Group an integer with thousands separators: 1234567 -> "1,234,567"
pub fn group_digits(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Fixed-point text of a non-negative value with its integer part grouped
fn group_fixed(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    match fixed.split_once('.') {
        Some((whole, fraction)) => match whole.parse::<u64>() {
            Ok(whole) => format!("{}.{}", group_digits(whole), fraction),
            Err(_) => fixed,
        },
        None => fixed,
    }
}

/// Compact notation with up to two optional decimals: 1234567890 -> "1.23b"
pub fn compact_number(value: f64) -> String {
    let (scaled, suffix) = if value >= 1e12 {
        (value / 1e12, "t")
    } else if value >= 1e9 {
        (value / 1e9, "b")
    } else if value >= 1e6 {
        (value / 1e6, "m")
    } else if value >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };

    let mut text = format!("{:.2}", scaled);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    format!("{}{}", text, suffix)
}

/// Format a USD amount the way the explorer shows it
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "$0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_usd(-value));
    }

    if value > COMPACT_THRESHOLD {
        format!("${}", compact_number(value.round()))
    } else if value < DUST_THRESHOLD {
        "< $0.0001".to_string()
    } else if value > 1000.0 {
        format!("${}", group_digits(value.round() as u64))
    } else if value < 0.1 {
        format!("${}", group_fixed(value, 4))
    } else {
        format!("${}", group_fixed(value, 2))
    }
}

/// Plain (non-currency) amount, used for token quantities
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_amount(-value));
    }

    if value > COMPACT_THRESHOLD {
        compact_number(value.round())
    } else if value < DUST_THRESHOLD {
        "< 0.0001".to_string()
    } else if value > 1000.0 {
        group_digits(value.round() as u64)
    } else {
        let text = group_fixed(value, 4);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Signed percentage, empty for a missing value
pub fn format_percent(percent: Option<f64>) -> String {
    let percent = match percent {
        Some(p) => p,
        None => return String::new(),
    };

    if !percent.is_finite() {
        return String::new();
    }
    if percent == 0.0 {
        return "0%".to_string();
    }
    if percent > 0.0 && percent < DUST_THRESHOLD {
        return "< 0.0001%".to_string();
    }
    if percent < 0.0 && percent > -DUST_THRESHOLD {
        return "> -0.0001%".to_string();
    }

    let fixed = format!("{:.2}", percent);
    if fixed == "0.00" || fixed == "-0.00" {
        return "0%".to_string();
    }

    if percent > 100.0 {
        format!("+{}%", group_digits(percent.round() as u64))
    } else if percent > 0.0 {
        format!("+{}%", fixed)
    } else {
        format!("{}%", fixed)
    }
}
