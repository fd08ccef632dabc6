/// Inserts a thin space between thousands groups of a rendered number.
///
/// Only the integer part is grouped; a sign and any decimal digits pass
/// through untouched. Strings that are not plain decimal numbers come back
/// unchanged.
#[must_use]
pub fn group_thousands(rendered: &str) -> String {
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integer_part, decimal_part) = match rest.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (rest, None),
    };

    if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
        return rendered.to_owned();
    }

    let len = integer_part.len();
    let mut grouped = String::with_capacity(rendered.len() + len / 3);
    grouped.push_str(sign);
    for (i, digit) in integer_part.char_indices() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    if let Some(decimal) = decimal_part {
        grouped.push('.');
        grouped.push_str(decimal);
    }
    grouped
}

/// Renders a population figure with a fixed number of decimals and
/// space-separated thousands groups.
#[must_use]
pub fn format_population(value: f64, decimals: usize) -> String {
    group_thousands(&format!("{value:.decimals$}"))
}
