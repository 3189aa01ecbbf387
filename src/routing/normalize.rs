//! Path normalization.
//!
//! Every path that enters the routing table, and every request path that is
//! matched against it, goes through [`normalize`] first so that
//! `/foo//bar/` and `/foo/bar` resolve to the same routing key.

/// Canonicalize a raw path into a routing key.
///
/// Runs of `/` collapse into one, the result always has exactly one leading
/// `/`, and trailing slashes are dropped unless the path is the root.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);

    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    }
    out
}
