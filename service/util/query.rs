/// Splits `key=value&key2=value2` into `(key, value)` pairs.
///
/// Values are taken as-is; the only parameters this service reads are
/// plain integers.
pub fn parse_query(query: &str) -> Vec<(&str, &str)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}

/// Looks up `key` and parses it as a `u32`.
pub fn query_u32(pairs: &[(&str, &str)], key: &str) -> Result<u32, String> {
    let raw = pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.trim())
        .ok_or_else(|| format!("missing query parameter `{}`", key))?;
    raw.parse::<u32>()
        .map_err(|_| format!("query parameter `{}` must be a non-negative integer, got `{}`", key, raw))
}
