//! Shared text utilities for message-flow processing

use unicode_width::UnicodeWidthStr;

/// Display width of `s` in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Remove every literal `\(` and `\)` token from a regex source
///
/// ```
/// use msgflow::core::strip_escaped_parens;
///
/// assert_eq!(strip_escaped_parens(r"\((\w+)\)"), "(\\w+)");
/// ```
pub fn strip_escaped_parens(pattern: &str) -> String {
    pattern.replace(r"\(", "").replace(r"\)", "")
}

/// Count opening and closing parentheses, in that order
pub fn count_parens(s: &str) -> (usize, usize) {
    s.chars().fold((0, 0), |(open, close), c| match c {
        '(' => (open + 1, close),
        ')' => (open, close + 1),
        _ => (open, close),
    })
}

/// Replace `@1`..`@N` placeholders with `values[0]`..`values[N-1]` in one pass
///
/// At each `@` the longest index of at most two digits that falls in
/// `1..=values.len()` is taken, so `@12` means group twelve when twelve groups
/// exist. An `@` not followed by a usable index is copied as is. Substituted
/// values are never scanned again.
///
/// ```
/// use msgflow::core::substitute_placeholders;
///
/// let values = vec!["A".to_string(), "B".to_string()];
/// assert_eq!(substitute_placeholders("@1->@2 @3", &values), "A->B @3");
/// ```
pub fn substitute_placeholders(template: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        match placeholder_index(after, values.len()) {
            Some((index, digits)) => {
                out.push_str(&values[index - 1]);
                rest = &after[digits..];
            }
            None => {
                out.push('@');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Resolve the placeholder index at the start of `s`, returning it with its digit count
fn placeholder_index(s: &str, max: usize) -> Option<(usize, usize)> {
    if s.starts_with('0') {
        return None;
    }
    let digits = s.bytes().take(2).take_while(u8::is_ascii_digit).count();
    (1..=digits).rev().find_map(|len| {
        let index: usize = s[..len].parse().ok()?;
        (1..=max).contains(&index).then_some((index, len))
    })
}
