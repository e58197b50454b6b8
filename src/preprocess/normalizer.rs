/// Replace every non ASCII letter with a space and lowercase the rest
///
/// # Arguments
/// * `text` - raw text
///
/// # Returns
/// * `String` - same char count as `text`, only `a-z` and spaces
#[inline]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
        .collect()
}

/// Split normalized text on whitespace runs
/// empty tokens never appear
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// normalize + tokenize
pub fn normalize_tokens(text: &str) -> Vec<String> {
    tokenize(&normalize(text))
}
