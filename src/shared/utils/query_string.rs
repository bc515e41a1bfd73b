/// Pull the `query` parameter out of a raw location search string.
///
/// Accepts the string with or without its leading '?'. Percent-escapes and
/// '+' spaces are decoded. A present-but-blank parameter counts as absent so
/// `?query=` still triggers the default search.
pub fn query_param_from_search(search: &str) -> Option<String> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    for pair in raw.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        if key != "query" {
            continue;
        }

        let spaced = value.replace('+', " ");
        let decoded = match urlencoding::decode(&spaced) {
            Ok(cow) => cow.into_owned(),
            Err(_) => spaced,
        };
        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(trimmed.to_string());
    }
    None
}

/// Read the `query` parameter of the current page URL, if any.
#[cfg(target_arch = "wasm32")]
pub fn initial_query_param() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    query_param_from_search(&search)
}
