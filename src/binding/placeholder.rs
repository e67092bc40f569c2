use crate::data::Row;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").ok());

/// Replaces every `{Column}` token in `template` with the matching cell of `row`.
///
/// Tokens are scanned once, left to right; substituted text is never scanned
/// again. Tokens naming a column the row lacks are kept verbatim, and without
/// a row the template is returned unchanged.
pub fn substitute<'a>(template: &'a str, row: Option<&Row>) -> Cow<'a, str> {
    let (Some(row), Some(token)) = (row, TOKEN.as_ref()) else {
        return Cow::Borrowed(template);
    };
    token.replace_all(template, |caps: &Captures| match row.get(&caps[1]) {
        Some(cell) => cell.to_string(),
        None => caps[0].to_string(),
    })
}

/// Column names referenced by `{...}` tokens, in order of appearance.
pub fn tokens(template: &str) -> Vec<&str> {
    match TOKEN.as_ref() {
        Some(token) => token
            .captures_iter(template)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect(),
        None => Vec::new(),
    }
}
