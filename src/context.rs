//! Execution context consulted by the request-bound resolvers.
//!
//! A process either handles an HTTP-like request ([`ExecutionContext::Http`])
//! or runs on a console ([`ExecutionContext::Console`]), in which case the
//! cookie, query, header and session sources do not exist at all.

use std::collections::HashMap;

use crate::error::{LocaleError, Result};

/// The ambient input available to resolvers.
#[derive(Debug, Clone, Default)]
pub enum ExecutionContext {
    /// Handling a request.
    Http(RequestContext),
    /// Running without a request.
    #[default]
    Console,
}

impl ExecutionContext {
    /// The current request, if any.
    pub fn request(&self) -> Option<&RequestContext> {
        match self {
            Self::Http(request) => Some(request),
            Self::Console => None,
        }
    }

    /// Whether this is a console context.
    pub fn is_console(&self) -> bool {
        matches!(self, Self::Console)
    }
}

/// The parts of an incoming request that locale sources read.
///
/// Header names are case-insensitive. Cookies are read from the `Cookie`
/// header on demand, so a malformed header surfaces as an error only when a
/// resolver actually asks for a cookie.
///
/// # Example
///
/// ```
/// use locale_chain::context::RequestContext;
///
/// let request = RequestContext::new()
///     .with_header("Cookie", "theme=dark; xo.locale=de-DE")
///     .with_query_string("page=2&locale=fr");
///
/// assert_eq!(request.cookie("xo.locale").unwrap().as_deref(), Some("de-DE"));
/// assert_eq!(request.query_param("locale"), Some("fr"));
/// assert_eq!(request.header("cookie"), Some("theme=dark; xo.locale=de-DE"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    session: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Repeated headers are joined with `, `, except
    /// `Cookie` which is joined with `; `.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let key = name.trim().to_ascii_lowercase();
        let separator = if key == "cookie" { "; " } else { ", " };
        self.headers
            .entry(key)
            .and_modify(|existing| {
                existing.push_str(separator);
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
        self
    }

    /// Add a single cookie.
    pub fn with_cookie(self, name: &str, value: &str) -> Self {
        self.with_header("Cookie", &format!("{}={}", name, value))
    }

    /// Add a query parameter. A repeated parameter keeps its first value.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
        self
    }

    /// Add every parameter of a raw query string (`a=1&b=2`).
    ///
    /// A leading `?` is ignored and a parameter without `=` gets an empty
    /// value. Values are taken verbatim; no percent-decoding is applied.
    pub fn with_query_string(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            self = self.with_query_param(name, value);
        }
        self
    }

    /// Add a session value.
    pub fn with_session_value(mut self, key: &str, value: &str) -> Self {
        self.session.insert(key.to_string(), value.to_string());
        self
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Look up a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Look up a session value.
    pub fn session_value(&self, key: &str) -> Option<&str> {
        self.session.get(key).map(String::as_str)
    }

    /// All cookies sent with the request.
    ///
    /// # Errors
    ///
    /// Returns `MalformedCookie` if the `Cookie` header contains a pair
    /// without `=` or with an empty name.
    pub fn cookies(&self) -> Result<HashMap<String, String>> {
        match self.header("cookie") {
            Some(header) => parse_cookie_header(header),
            None => Ok(HashMap::new()),
        }
    }

    /// Look up a single cookie.
    pub fn cookie(&self, name: &str) -> Result<Option<String>> {
        Ok(self.cookies()?.remove(name))
    }
}

/// Parse a `Cookie` header (`a=1; b=2`) into name/value pairs.
///
/// Surrounding double quotes are stripped from values. When a name repeats,
/// the first occurrence wins.
pub fn parse_cookie_header(header: &str) -> Result<HashMap<String, String>> {
    let mut cookies = HashMap::new();

    for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').ok_or_else(|| LocaleError::MalformedCookie {
            message: format!("pair '{}' has no '='", pair),
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(LocaleError::MalformedCookie {
                message: format!("pair '{}' has an empty name", pair),
            });
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        cookies
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }

    Ok(cookies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_console() {
        let ctx = ExecutionContext::default();
        assert!(ctx.is_console());
        assert!(ctx.request().is_none());
    }

    #[test]
    fn http_context_exposes_request() {
        let ctx = ExecutionContext::Http(RequestContext::new().with_query_param("a", "b"));
        assert!(!ctx.is_console());
        assert_eq!(ctx.request().unwrap().query_param("a"), Some("b"));
    }

    #[test]
    fn headers_are_case_insensitive() {
        let req = RequestContext::new().with_header("Accept-Language", "en");
        assert_eq!(req.header("accept-language"), Some("en"));
        assert_eq!(req.header("ACCEPT-LANGUAGE"), Some("en"));
        assert_eq!(req.header("X-Other"), None);
    }

    #[test]
    fn repeated_headers_are_joined() {
        let req = RequestContext::new()
            .with_header("Accept-Language", "en")
            .with_header("accept-language", "fr;q=0.5");
        assert_eq!(req.header("Accept-Language"), Some("en, fr;q=0.5"));
    }

    #[test]
    fn cookies_accumulate_into_cookie_header() {
        let req = RequestContext::new()
            .with_cookie("a", "1")
            .with_cookie("b", "2");
        assert_eq!(req.header("Cookie"), Some("a=1; b=2"));
        let cookies = req.cookies().unwrap();
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
        assert_eq!(cookies.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn missing_cookie_header_is_empty() {
        let req = RequestContext::new();
        assert!(req.cookies().unwrap().is_empty());
        assert_eq!(req.cookie("anything").unwrap(), None);
    }

    #[test]
    fn parse_cookie_header_trims_and_unquotes() {
        let cookies = parse_cookie_header(" a = 1 ;b=\"quoted\";; ").unwrap();
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
        assert_eq!(cookies.get("b").map(String::as_str), Some("quoted"));
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn parse_cookie_header_first_value_wins() {
        let cookies = parse_cookie_header("a=1; a=2").unwrap();
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn parse_cookie_header_allows_empty_value() {
        let cookies = parse_cookie_header("a=").unwrap();
        assert_eq!(cookies.get("a").map(String::as_str), Some(""));
    }

    #[test]
    fn parse_cookie_header_rejects_pair_without_equals() {
        let err = parse_cookie_header("a=1; broken").unwrap_err();
        assert!(matches!(err, LocaleError::MalformedCookie { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn parse_cookie_header_rejects_empty_name() {
        let err = parse_cookie_header("=value").unwrap_err();
        assert!(matches!(err, LocaleError::MalformedCookie { .. }));
    }

    #[test]
    fn query_string_parsing() {
        let req = RequestContext::new().with_query_string("?locale=pt-BR&flag&x=1&locale=es");
        assert_eq!(req.query_param("locale"), Some("pt-BR"));
        assert_eq!(req.query_param("flag"), Some(""));
        assert_eq!(req.query_param("x"), Some("1"));
        assert_eq!(req.query_param("missing"), None);
    }

    #[test]
    fn session_values() {
        let req = RequestContext::new()
            .with_session_value("locale", "it")
            .with_session_value("locale", "it-CH");
        assert_eq!(req.session_value("locale"), Some("it-CH"));
        assert_eq!(req.session_value("other"), None);
    }
}
