/// Group the digits of an integer in threes: 1234567 -> "1,234,567"
pub fn grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Dollar amount with cents and thousands separators: "$12,345.60"
pub fn money(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let grouped = grouped_int(whole.parse::<i64>().unwrap_or(0));

    if value < 0.0 && rounded != "0.00" {
        format!("-${}.{}", grouped, frac)
    } else {
        format!("${}.{}", grouped, frac)
    }
}

/// Dollar amount without cents: "$1,250"
pub fn whole_money(value: f64) -> String {
    format!("${}", grouped_int(value.round() as i64))
}

/// Rate as a percentage with one decimal: 0.0825 -> "8.3%"
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Greedy word wrap at `width` characters
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
