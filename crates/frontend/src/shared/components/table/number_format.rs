//! Number formatting for tables and summary cards (en-US conventions)

/// Formats a number with comma thousands separators and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every 3 digits from the end of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// US dollars with 2 decimals: `1234.5` -> `$1,234.50`, `-3.0` -> `-$3.00`
pub fn format_currency(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Whole count with thousands separators: `1234567` -> `1,234,567`
pub fn format_count(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}
