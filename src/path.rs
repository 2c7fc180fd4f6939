//! Address normalization and segment splitting.

/// The character that separates path segments.
pub const SEPARATOR: char = '/';

/// The prefix that turns a segment into a named parameter, e.g. `$id`.
pub const PARAM_MARKER: char = '$';

/// Strips at most one leading and one trailing separator.
///
/// Repeated separators inside the address are left alone.
///
/// ```
/// use stanza::path::normalize;
///
/// assert_eq!(normalize("/users/"), "users");
/// assert_eq!(normalize("//users//"), "/users/");
/// assert_eq!(normalize("/"), "");
/// ```
pub fn normalize(address: &str) -> &str {
    let address = address.strip_prefix(SEPARATOR).unwrap_or(address);
    address.strip_suffix(SEPARATOR).unwrap_or(address)
}

/// Splits `address` into segments, with `method` as the synthetic first one.
///
/// The result is the same as joining `method` and `address` with the
/// separator and splitting the whole string, so an empty address yields
/// `[method, ""]`.
pub fn segments<'a>(address: &'a str, method: &'a str) -> Vec<&'a str> {
    method
        .split(SEPARATOR)
        .chain(address.split(SEPARATOR))
        .collect()
}

/// Returns the parameter name if `segment` is a parameter marker.
pub fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(PARAM_MARKER)
}
