//! Quote-aware tokenizing of a row's value list.

/// Splits a value list like `'JP','Japan','Japan',JPN,392,'AS'` on commas
/// that are not inside quotes.
///
/// Both single and double quotes open a quoted region; there is no escape
/// character. After splitting, surrounding whitespace and one matching pair
/// of quote characters are stripped from each token, so embedded commas in
/// quoted names survive as part of a single field while unquoted numeric
/// literals pass through unchanged.
pub fn split_row_values(values: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in values.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => {
                    current.push(ch);
                    quote = Some(ch);
                }
                ',' => tokens.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            },
        }
    }
    tokens.push(current);

    tokens
        .iter()
        .map(|token| strip_quotes(token.trim()).to_string())
        .collect()
}

/// Strips one matching pair of surrounding quote characters, if present.
fn strip_quotes(token: &str) -> &str {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return &token[1..token.len() - 1];
        }
    }
    token
}
