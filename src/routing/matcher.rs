//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a normalized request path against one method's routes
//! - Bind `{name}` segments to the corresponding request segments
//! - Return the first route that matches, or explicit no-match
//!
//! # Design Decisions
//! - First match wins: registration order decides, not specificity
//! - Segment counts must be equal; there are no wildcard segments
//! - Literal segments are compared byte for byte (case-sensitive)
//! - No regex; templates are pre-split at registration

use crate::routing::params::RouteParams;
use crate::routing::table::Route;
use crate::routing::template::{split_segments, Segment};

/// A successful match: the route plus the parameters it bound.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: RouteParams,
}

/// Scan `routes` in order and return the first one matching `path`.
///
/// `path` must already be normalized.
pub fn match_route<'a>(routes: &'a [Route], path: &str) -> Option<RouteMatch<'a>> {
    let request: Vec<&str> = split_segments(path).collect();

    routes.iter().find_map(|route| {
        match_segments(route, path, &request).map(|params| RouteMatch { route, params })
    })
}

fn match_segments(route: &Route, path: &str, request: &[&str]) -> Option<RouteParams> {
    let template = route.template();

    if template.is_root() && path == "/" {
        return Some(RouteParams::new());
    }

    if template.segments().len() != request.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (segment, actual) in template.segments().iter().zip(request) {
        match segment {
            Segment::Param(name) => params.bind(name, actual),
            Segment::Literal(expected) if expected == actual => {}
            Segment::Literal(_) => return None,
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::BoxedHandler;
    use crate::routing::table::RouteTable;
    use crate::routing::{Reply, RequestContext};
    use std::sync::Arc;

    fn noop() -> BoxedHandler {
        Arc::new(|_: &RequestContext, _: &RouteParams| Reply::text(""))
    }

    fn table(paths: &[&str]) -> RouteTable {
        let mut t = RouteTable::new();
        for p in paths {
            t.register("GET", p, noop());
        }
        t
    }

    fn resolve<'a>(t: &'a RouteTable, path: &str) -> Option<(String, Vec<(String, String)>)> {
        match_route(t.lookup("GET"), path).map(|m| {
            (
                m.route.template().to_string(),
                m.params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        })
    }

    #[test]
    fn test_literal_match() {
        let t = table(&["/about"]);
        let (tpl, params) = resolve(&t, "/about").unwrap();
        assert_eq!(tpl, "/about");
        assert!(params.is_empty());
        assert!(resolve(&t, "/About").is_none());
    }

    #[test]
    fn test_single_param() {
        let t = table(&["/users/{id}"]);
        let (_, params) = resolve(&t, "/users/42").unwrap();
        assert_eq!(params, vec![("id".to_string(), "42".to_string())]);
    }

    #[test]
    fn test_params_in_template_order() {
        let t = table(&["/users/{id}/posts/{postId}"]);
        let m = match_route(t.lookup("GET"), "/users/42/posts/7").unwrap();
        assert_eq!(m.params.values().collect::<Vec<_>>(), vec!["42", "7"]);
        assert_eq!(m.params.get("postId"), Some("7"));
    }

    #[test]
    fn test_segment_count_mismatch() {
        let t = table(&["/a/{b}"]);
        assert!(resolve(&t, "/a").is_none());
        assert!(resolve(&t, "/a/b/c").is_none());
        assert!(resolve(&t, "/a/b").is_some());
    }

    #[test]
    fn test_first_match_wins() {
        let t = table(&["/a/{x}", "/a/fixed"]);
        let (tpl, params) = resolve(&t, "/a/fixed").unwrap();
        assert_eq!(tpl, "/a/{x}");
        assert_eq!(params, vec![("x".to_string(), "fixed".to_string())]);

        let t = table(&["/a/fixed", "/a/{x}"]);
        let (tpl, _) = resolve(&t, "/a/fixed").unwrap();
        assert_eq!(tpl, "/a/fixed");
    }

    #[test]
    fn test_root() {
        let t = table(&["/"]);
        let (tpl, params) = resolve(&t, "/").unwrap();
        assert_eq!(tpl, "/");
        assert!(params.is_empty());
        assert!(resolve(&t, "/x").is_none());
    }

    #[test]
    fn test_param_binds_empty_root_segment() {
        let t = table(&["/{id}", "/"]);
        let (tpl, params) = resolve(&t, "/").unwrap();
        assert_eq!(tpl, "/{id}");
        assert_eq!(params, vec![("id".to_string(), String::new())]);

        let t = table(&["/", "/{id}"]);
        let (tpl, _) = resolve(&t, "/").unwrap();
        assert_eq!(tpl, "/");
    }

    #[test]
    fn test_malformed_placeholder_is_literal() {
        let t = table(&["/x/{}", "/y/{1a-b}"]);
        assert!(resolve(&t, "/x/anything").is_none());
        assert!(resolve(&t, "/x/{}").is_some());
        assert!(resolve(&t, "/y/{1a-b}").is_some());
        assert!(resolve(&t, "/y/1a").is_none());
    }

    #[test]
    fn test_failed_route_keeps_no_partial_binding() {
        let t = table(&["/a/{x}/one", "/a/{y}/two"]);
        let (tpl, params) = resolve(&t, "/a/v/two").unwrap();
        assert_eq!(tpl, "/a/{y}/two");
        assert_eq!(params, vec![("y".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_values_are_not_coerced() {
        let t = table(&["/n/{n}"]);
        let (_, params) = resolve(&t, "/n/007").unwrap();
        assert_eq!(params[0].1, "007");
    }

    #[test]
    fn test_no_routes() {
        let t = RouteTable::new();
        assert!(match_route(t.lookup("GET"), "/").is_none());
    }
}
