/// Splits comma-separated text into trimmed, non-empty tokens, keeping order.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Learning budget options offered on the career page, in whole dollars.
pub const BUDGET_OPTIONS: &[(i64, &str)] = &[
    (0, "Free resources only"),
    (500, "Up to $500"),
    (1000, "Up to $1,000"),
    (2000, "Up to $2,000"),
    (5000, "$5,000+"),
];

/// Lenient integer parse: skips leading whitespace, accepts an optional sign,
/// takes the leading digits and ignores the rest. Anything else is `0`.
pub fn parse_budget(input: &str) -> i64 {
    let text = input.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}
