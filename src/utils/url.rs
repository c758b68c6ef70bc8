//! URL decoding and link-splitting utilities

/// Decodes a URL-encoded string
///
/// Returns the original string if decoding fails.
///
/// # Examples
/// ```
/// use clashgen::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Parses `&`-separated `key=value` pairs into `params`.
///
/// Pairs without `=` are ignored. Later occurrences of a key overwrite earlier ones.
/// Values are kept verbatim, without percent-decoding.
pub fn parse_query_into(query: &str, params: &mut Vec<(String, String)>) {
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            match params.iter_mut().find(|(k, _)| k == key) {
                Some(existing) => existing.1 = value.to_string(),
                None => params.push((key.to_string(), value.to_string())),
            }
        }
    }
}

/// Looks up a parsed query value.
pub fn query_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Splits off a `#fragment`, percent-decoding it.
pub fn split_fragment(input: &str) -> (&str, Option<String>) {
    match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(url_decode(fragment))),
        None => (input, None),
    }
}

/// Splits `host:port` on the first `:`, or after the closing bracket of an IPv6 literal.
///
/// Returns `None` when no port separator is present.
pub fn split_host_port(input: &str) -> Option<(&str, &str)> {
    if let Some(rest) = input.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        let port = after.strip_prefix(':')?;
        return Some((host, port));
    }
    input.split_once(':')
}
