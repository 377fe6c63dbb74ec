//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL.
///
/// Reads `window.location.search` directly, so it works before the router
/// has been mounted.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query_param(&search, key)
}

/// Find `key` in a query string such as `?network=testnet&x=1`.
///
/// A key without `=` yields an empty value. Values are URL-decoded.
pub fn parse_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}
