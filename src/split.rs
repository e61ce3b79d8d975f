use crate::initialism::match_prefix;

/// Split an identifier into words.
///
/// Anything containing an underscore is treated as snake_case, everything
/// else as camelCase.
pub fn split(s: &str) -> Vec<&str> {
    if s.contains('_') {
        split_snake(s)
    } else {
        split_camel(s)
    }
}

/// Split a camelCase or PascalCase identifier on uppercase letters,
/// keeping known initialisms together.
///
/// `"ThisHTTPSConnectionID"` → `["This", "HTTPS", "Connection", "ID"]`
pub fn split_camel(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    // Byte offset where the current word starts
    let mut last = 0;

    for (pos, c) in s.char_indices() {
        if pos <= last || !c.is_uppercase() {
            continue;
        }

        let initialism = match_prefix(&s[last..]);
        if !initialism.is_empty() {
            words.push(initialism);
            last += initialism.len();
            continue;
        }

        words.push(&s[last..pos]);
        last = pos;
    }

    if last < s.len() {
        words.push(&s[last..]);
    }

    words
}

/// Split a snake_case identifier on every underscore.
///
/// Leading, trailing or doubled underscores produce empty words.
/// An empty input has no words at all.
pub fn split_snake(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    s.split('_').collect()
}
