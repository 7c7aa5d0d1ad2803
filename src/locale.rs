//! Locale identifier helpers.
//!
//! Normalization, syntactic validation and `Accept-Language` parsing shared
//! by the built-in resolvers.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

// Primary language subtag followed by any number of alphanumeric subtags.
static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]{2,3}|[A-Za-z]{5,8})(?:-[A-Za-z0-9]{1,8})*$").unwrap()
});

/// Normalize a locale identifier to a canonical-ish form for lookup.
///
/// - Trims whitespace.
/// - Drops a POSIX encoding or modifier suffix (`en_US.UTF-8`, `de_DE@euro`).
/// - Converts `_` to `-`.
///
/// # Example
///
/// ```
/// use locale_chain::locale::normalize_locale;
///
/// assert_eq!(normalize_locale(" en_US.UTF-8 "), "en-US");
/// assert_eq!(normalize_locale("pt-BR"), "pt-BR");
/// ```
pub fn normalize_locale(s: &str) -> String {
    let trimmed = s.trim();
    let base = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or(trimmed);
    base.replace('_', "-")
}

/// Check whether a (normalized) value looks like a locale tag.
///
/// This is a syntactic check only; `xx-YY` passes even though no such
/// locale exists.
pub fn is_valid_locale(s: &str) -> bool {
    LOCALE_TAG.is_match(s)
}

/// Parse an `Accept-Language` header into locale tags, best first.
///
/// Entries are ordered by descending quality value; entries with equal
/// quality keep their header order. The wildcard `*`, entries with `q=0`,
/// entries with an unparsable quality and tags that fail
/// [`is_valid_locale`] are dropped.
///
/// # Example
///
/// ```
/// use locale_chain::locale::parse_accept_language;
///
/// let tags = parse_accept_language("fr;q=0.8, en-US, *;q=0.1, de;q=0.8");
/// assert_eq!(tags, vec!["en-US", "fr", "de"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, u16)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = normalize_locale(parts.next()?);
            if tag.is_empty() || tag == "*" || !is_valid_locale(&tag) {
                return None;
            }

            let mut quality = 1000;
            for param in parts {
                let Some((key, value)) = param.split_once('=') else {
                    continue;
                };
                if key.trim().eq_ignore_ascii_case("q") {
                    let q: f32 = value.trim().parse().ok()?;
                    if !(0.0..=1.0).contains(&q) {
                        return None;
                    }
                    quality = (q * 1000.0).round() as u16;
                }
            }

            (quality > 0).then_some((tag, quality))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    weighted.sort_by_key(|(_, q)| Reverse(*q));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}
