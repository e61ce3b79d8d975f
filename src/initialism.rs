/// Initialisms that stay a single word when splitting and are written in
/// full uppercase when assembling camel case.
///
/// Kept sorted so lookups can binary search.
pub const INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UI", "UID",
    "URI", "URL", "UTF8", "UUID", "VM", "XML",
];

/// Shortest candidate length checked by [`match_prefix`]
const MIN_LEN: usize = 1;
/// Longest entry in [`INITIALISMS`]
const MAX_LEN: usize = 5;

/// Check whether `word` is exactly one of the known initialisms (case-sensitive)
pub fn is_initialism(word: &str) -> bool {
    INITIALISMS.binary_search(&word).is_ok()
}

/// Return the longest initialism that `s` starts with, or `""` if none.
///
/// Matching is case-sensitive: `"HTTPSConn"` yields `"HTTPS"`, while
/// `"httpsConn"` yields nothing.
pub fn match_prefix(s: &str) -> &'static str {
    let mut longest = "";

    for len in MIN_LEN..=MAX_LEN {
        // `get` refuses to cut through a multi-byte char
        let Some(candidate) = s.get(..len) else {
            continue;
        };

        if let Ok(idx) = INITIALISMS.binary_search(&candidate) {
            longest = INITIALISMS[idx];
        }
    }

    longest
}
